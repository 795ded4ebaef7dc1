//! git-sweep CLI - Clean up merged and stale branches from your Git remotes.

use clap::Parser;

mod commands;
mod output;
mod services;

use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    output::set_quiet(cli.quiet);

    let result = match cli.command {
        Commands::Preview { args, json } => commands::preview::run(&args, json),
        Commands::Cleanup { args } => commands::cleanup::run(&args),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
