//! Subscription CLI commands

use anyhow::{Context, Result};
use clap::Subcommand;

use super::output::Output;
use crate::api::{ApiClient, Subscription, SubscriptionType};
use crate::config::Config;

#[derive(Subcommand)]
pub enum SubscriptionCommands {
    /// Activate a subscription
    Activate {
        /// Type of subscription
        #[arg(value_enum)]
        subscription_type: SubscriptionType,

        /// Fully qualified name of the tag to subscribe to,
        /// e.g. docker.io/library/alpine:latest
        subscription_key: String,
    },

    /// Deactivate a subscription
    Deactivate {
        /// Type of subscription
        #[arg(value_enum)]
        subscription_type: SubscriptionType,

        /// Fully qualified name of the subscribed tag
        subscription_key: String,
    },

    /// List all current subscriptions
    List {
        /// Print additional details about each subscription
        #[arg(long)]
        full: bool,
    },

    /// Get details about a particular subscription
    Get {
        /// Subscription ID
        subscription_id: String,
    },

    /// Delete a subscription by ID (must already be deactivated)
    Del {
        /// Subscription ID
        subscription_id: String,
    },
}

pub async fn run(cmd: SubscriptionCommands, config: &Config, output: &Output) -> Result<()> {
    let client = ApiClient::new(config)?;

    match cmd {
        SubscriptionCommands::Activate {
            subscription_type,
            subscription_key,
        } => activate(&client, output, subscription_type, &subscription_key).await,
        SubscriptionCommands::Deactivate {
            subscription_type,
            subscription_key,
        } => deactivate(&client, output, subscription_type, &subscription_key).await,
        SubscriptionCommands::List { full } => list(&client, output, full).await,
        SubscriptionCommands::Get { subscription_id } => {
            get(&client, output, &subscription_id).await
        }
        SubscriptionCommands::Del { subscription_id } => {
            del(&client, output, &subscription_id).await
        }
    }
}

async fn activate(
    client: &ApiClient,
    output: &Output,
    subscription_type: SubscriptionType,
    subscription_key: &str,
) -> Result<()> {
    output.verbose_ctx(
        "activate",
        &format!("{} {}", subscription_type, subscription_key),
    );

    let payload = client
        .activate_subscription(subscription_type, subscription_key)
        .await?
        .into_payload()?;

    output.data(&payload);
    Ok(())
}

async fn deactivate(
    client: &ApiClient,
    output: &Output,
    subscription_type: SubscriptionType,
    subscription_key: &str,
) -> Result<()> {
    output.verbose_ctx(
        "deactivate",
        &format!("{} {}", subscription_type, subscription_key),
    );

    let payload = client
        .deactivate_subscription(subscription_type, subscription_key)
        .await?
        .into_payload()?;

    output.data(&payload);
    Ok(())
}

async fn list(client: &ApiClient, output: &Output, full: bool) -> Result<()> {
    output.verbose_ctx("list", &format!("full={}", full));

    let payload = client.get_subscriptions().await?.into_payload()?;

    if output.is_json() {
        output.data(&payload);
        return Ok(());
    }

    let subscriptions: Vec<Subscription> =
        serde_json::from_value(payload).context("Unexpected subscription list payload")?;

    if subscriptions.is_empty() {
        println!("No subscriptions found.");
    } else if full {
        println!("{:<40} {:<48} {:<15} ACTIVE", "ID", "KEY", "TYPE");
        println!("{}", "-".repeat(110));
        for sub in &subscriptions {
            println!(
                "{:<40} {:<48} {:<15} {}",
                sub.subscription_id, sub.subscription_key, sub.subscription_type, sub.active
            );
        }
    } else {
        println!("{:<48} {:<15} ACTIVE", "KEY", "TYPE");
        println!("{}", "-".repeat(70));
        for sub in &subscriptions {
            println!(
                "{:<48} {:<15} {}",
                sub.subscription_key, sub.subscription_type, sub.active
            );
        }
    }

    Ok(())
}

async fn get(client: &ApiClient, output: &Output, subscription_id: &str) -> Result<()> {
    output.verbose_ctx("get", subscription_id);

    let payload = client
        .get_subscription_by_id(subscription_id)
        .await?
        .into_payload()?;

    output.data(&payload);
    Ok(())
}

async fn del(client: &ApiClient, output: &Output, subscription_id: &str) -> Result<()> {
    output.verbose_ctx("del", subscription_id);

    client
        .delete_subscription_by_id(subscription_id)
        .await?
        .into_payload()?;

    output.success("Success");
    Ok(())
}
