//! Subscription CLI - manage notification subscriptions on a remote engine

use std::process::ExitCode;

fn main() -> ExitCode {
    subscription_cli::cli::run()
}
