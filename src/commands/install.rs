//! Install command family implementation
//!
//! Thin shell around the dispatcher:
//! 1. Load configuration and build the request policy
//! 2. Classify the positional arguments into a request
//! 3. Open the engine and dispatch
//! 4. Hand the staged transaction over (summary, confirmation, optional
//!    YAML file for the external executor)

use std::io::IsTerminal;

use console::Style;
use inquire::Confirm;

use crate::cli::{Cli, InstallArgs};
use crate::config::Config;
use crate::dispatch;
use crate::engine::repo::RepoEngine;
use crate::engine::transaction::{StagedInstall, Transaction};
use crate::error::{Result, RpkgError};
use crate::output;
use crate::request::{CommandKind, InstallRequest, Policy};

/// Run one install-family command
pub fn run(cli: &Cli, args: &InstallArgs, command: CommandKind) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.security {
        config.security_only = true;
    }
    let policy = build_policy(&config, cli);
    let request = InstallRequest::from_tokens(command, &args.packages, policy);

    let mut engine = RepoEngine::open(&config)?;
    dispatch::dispatch(&request, &mut engine)?;

    let transaction = engine.transaction();
    if transaction.is_empty() {
        output::info("Nothing to do.");
        return Ok(());
    }

    print_summary(transaction, cli.verbose);

    if !request.policy.assume_yes && !confirm()? {
        return Err(RpkgError::Aborted);
    }

    if let Some(out) = &cli.out {
        let yaml =
            serde_yaml::to_string(transaction).map_err(|e| RpkgError::TransactionWriteFailed {
                path: out.display().to_string(),
                reason: e.to_string(),
            })?;
        std::fs::write(out, yaml).map_err(|e| RpkgError::TransactionWriteFailed {
            path: out.display().to_string(),
            reason: e.to_string(),
        })?;
        output::info(format!("Transaction written to {}", out.display()));
    }

    output::info(format!(
        "Transaction staged: {} action(s).",
        transaction.len()
    ));
    Ok(())
}

fn build_policy(config: &Config, cli: &Cli) -> Policy {
    Policy {
        strict: cli.strict_override().unwrap_or(config.strict),
        assume_yes: cli.assumeyes || config.assume_yes,
        group_package_types: config.group_package_types.clone(),
    }
}

fn confirm() -> Result<bool> {
    if !std::io::stdin().is_terminal() {
        // Nothing to ask on a non-interactive run.
        return Ok(false);
    }
    Confirm::new("Is this ok?")
        .with_default(false)
        .with_help_message("Press 'y' to stage the transaction")
        .prompt()
        .map_err(|e| RpkgError::IoError {
            message: format!("Failed to read confirmation: {}", e),
        })
}

fn print_summary(transaction: &Transaction, verbose: bool) {
    println!("{}", Style::new().bold().apply_to("Installing:"));
    for item in transaction.staged() {
        match item {
            StagedInstall::Package { nevra } => println!("  {}", nevra),
            StagedInstall::LocalPackage { nevra, path, .. } => {
                if verbose {
                    println!("  {} (from {})", nevra, path);
                } else {
                    println!("  {}", nevra);
                }
            }
            StagedInstall::Group { id, packages } => {
                println!("  @{} ({} packages)", id, packages.len());
                if verbose {
                    for package in packages {
                        println!("    {}", package);
                    }
                }
            }
            StagedInstall::Module { name, stream, packages } => {
                println!("  {}:{} ({} packages)", name, stream, packages.len());
                if verbose {
                    for package in packages {
                        println!("    {}", package);
                    }
                }
            }
        }
    }
}
