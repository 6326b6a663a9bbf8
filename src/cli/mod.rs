//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `activate <TYPE> <KEY>` | Activate a subscription for a tag |
//! | `deactivate <TYPE> <KEY>` | Deactivate a subscription |
//! | `list [--full]` | List all current subscriptions |
//! | `get <ID>` | Show one subscription |
//! | `del <ID>` | Delete a deactivated subscription |
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Exit Codes
//!
//! 0 on success, 1 when the service rejects the request, 2 for auth or
//! server failures, transport errors, and missing configuration.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod subscription;

pub use app::{run, Cli};
pub use output::{Output, OutputFormat};
pub use subscription::SubscriptionCommands;
