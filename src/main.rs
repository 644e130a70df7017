//! rpkg - installation front-end for an RPM-style package resolution engine
//!
//! Converts a mixed install request (package specs, @group specs, local rpm
//! files) into an ordered sequence of engine calls, aggregates partial
//! failures and applies one global strictness policy. Dependency solving and
//! transaction execution belong to the engine and its executor.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod dispatch;
mod engine;
mod error;
mod hash;
mod nevra;
mod output;
mod request;

use cli::{Cli, Commands};
use request::CommandKind;

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Install(args) => commands::install::run(&cli, args, CommandKind::Install),
        Commands::Localinstall(args) => {
            commands::install::run(&cli, args, CommandKind::LocalInstall)
        }
        Commands::InstallN(args) => commands::install::run(&cli, args, CommandKind::InstallName),
        Commands::InstallNa(args) => {
            commands::install::run(&cli, args, CommandKind::InstallNameArch)
        }
        Commands::InstallNevra(args) => {
            commands::install::run(&cli, args, CommandKind::InstallNevra)
        }
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
