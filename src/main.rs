//! tfaffected CLI - find the Terraform projects affected by a change
//!
//! Usage: tfaffected [COMMAND]
//!
//! Commands:
//!   affected  Resolve the projects affected by changed files (default)
//!   classify  Print the role of each directory

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use tfaffected::commands::{cmd_affected, cmd_classify, wants_json};
use tfaffected::presentation::cli::{Cli, Commands};
use tfaffected::presentation::output::{emit_event, ErrorEvent};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let json = cli.json;
    let root = cli.root.clone();
    let command = cli.command_or_default();

    let (name, result) = match &command {
        Commands::Affected(args) => ("affected", cmd_affected(&root, args, json)),
        Commands::Classify { dirs } => ("classify", cmd_classify(dirs, json)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let json = match &command {
                Commands::Affected(args) => wants_json(&root, args, json),
                Commands::Classify { .. } => json,
            };
            if json {
                let _ = emit_event(&ErrorEvent::new(name, format!("{:#}", e)));
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays parseable. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
