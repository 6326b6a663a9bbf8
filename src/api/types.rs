//! Subscription record and type definitions

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of event a subscription listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum SubscriptionType {
    /// Notify when a new image is pushed to the tag
    TagUpdate,
    /// Notify when the image policy status changes
    PolicyEval,
    /// Notify when vulnerabilities are added, removed or modified
    VulnUpdate,
}

impl SubscriptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionType::TagUpdate => "tag_update",
            SubscriptionType::PolicyEval => "policy_eval",
            SubscriptionType::VulnUpdate => "vuln_update",
        }
    }
}

impl fmt::Display for SubscriptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tag_update" => Ok(SubscriptionType::TagUpdate),
            "policy_eval" => Ok(SubscriptionType::PolicyEval),
            "vuln_update" => Ok(SubscriptionType::VulnUpdate),
            other => Err(format!("Unknown subscription type: {}", other)),
        }
    }
}

/// A subscription record as returned by the engine.
///
/// The type is kept as a plain string here so records created by newer
/// engine versions still list cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub subscription_id: String,

    pub subscription_key: String,

    pub subscription_type: String,

    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub subscription_value: Option<String>,

    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}
