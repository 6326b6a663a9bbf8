//! Main CLI application structure

use std::process::ExitCode;

use clap::Parser;

use super::output::{Output, OutputFormat};
use super::subscription::{self, SubscriptionCommands};
use crate::api::ApiError;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "subscription")]
#[command(author, version, about = "Manage notification subscriptions on a remote engine")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Engine API base URL
    #[arg(long, global = true, env = "SUBSCRIPTION_CLI_URL")]
    pub url: Option<String>,

    /// Engine API username
    #[arg(long, global = true, env = "SUBSCRIPTION_CLI_USER")]
    pub user: Option<String>,

    /// Engine API password
    #[arg(long, global = true, env = "SUBSCRIPTION_CLI_PASS", hide_env_values = true)]
    pub pass: Option<String>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: SubscriptionCommands,
}

/// Main entry point for the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Subscription CLI starting");

    // Access check before any subcommand touches the network
    let config = match Config::resolve(cli.url, cli.user, cli.pass) {
        Ok(config) => config,
        Err(e) => {
            output.error(&format!("{:#}", e));
            return ExitCode::from(2);
        }
    };

    if let Err(e) = config.validate() {
        output.error(&e.to_string());
        return ExitCode::from(2);
    }

    output.verbose_ctx("config", &format!("Using API at {}", config.url));

    // One blocking remote call per invocation; a current-thread runtime
    // keeps the process single-threaded.
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            output.error(&format!("Failed to start runtime: {}", e));
            return ExitCode::from(2);
        }
    };

    match runtime.block_on(subscription::run(cli.command, &config, &output)) {
        Ok(()) => {
            output.verbose("Command completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            output.error(&format!("{:#}", e));
            ExitCode::from(exit_code_for(&e))
        }
    }
}

/// Maps a command error to its process exit code, defaulting to 2
fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ApiError>()
        .map(ApiError::exit_code)
        .unwrap_or(2)
}
