//! Solver Log eXtractor (SLX) - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use slx::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    slx::logging::init(cli.verbose);

    match cli.command {
        Commands::Extract { paths, merge, json } => commands::extract::handle(&paths, merge, json),
        Commands::Split { input, output_dir } => {
            commands::split::handle(input.as_deref(), output_dir.as_deref())
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
