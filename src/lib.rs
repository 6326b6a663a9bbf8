//! Subscription CLI - manage notification subscriptions on a remote engine
//!
//! Subscriptions are notification rules keyed by type and tag, held by a
//! remote image-scanning engine. This crate is the command-line surface:
//! each command issues one API call, folds the response into an envelope,
//! and maps the outcome to a process exit code.

pub mod api;
pub mod cli;
pub mod config;

pub use api::{ApiClient, ApiError, Envelope, Subscription, SubscriptionType};
pub use config::Config;
