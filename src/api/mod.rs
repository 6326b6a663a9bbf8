//! # Remote Subscription API
//!
//! Client layer for the engine's subscription endpoints.
//!
//! Every call produces an [`Envelope`] built from the HTTP status and body.
//! Commands branch on the envelope's success flag and derive the process
//! exit code from it; transport failures surface as [`ApiError`].

mod client;
mod envelope;
mod error;
mod types;

pub use client::ApiClient;
pub use envelope::Envelope;
pub use error::ApiError;
pub use types::{Subscription, SubscriptionType};
