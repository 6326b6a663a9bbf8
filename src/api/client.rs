//! HTTP client for the subscription endpoints
//!
//! One configured `reqwest::Client` with basic auth, base-URL joining, and
//! request timeouts. Every endpoint method folds the response into an
//! [`Envelope`] so callers get a uniform success/error shape.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde_json::json;

use super::envelope::Envelope;
use super::error::Result;
use super::types::SubscriptionType;
use crate::config::Config;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the engine's subscription API
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    user: String,
    pass: String,
}

impl ApiClient {
    /// Builds a client from resolved connection settings
    pub fn new(config: &Config) -> Result<Self> {
        // Fail on a bad URL here, before any command issues a request
        Url::parse(&config.url)?;

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            user: config.user.clone().unwrap_or_default(),
            pass: config.pass.clone().unwrap_or_default(),
        })
    }

    /// Builds an authenticated request for an endpoint path
    fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        // The base URL may carry a path prefix (e.g. /v1), so join textually
        // rather than with Url::join which would replace the last segment.
        let url = Url::parse(&format!(
            "{}/{}",
            self.base_url,
            endpoint.trim_start_matches('/')
        ))?;

        Ok(self
            .http
            .request(method, url)
            .basic_auth(&self.user, Some(&self.pass)))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Envelope> {
        let response = builder.send().await?;
        Envelope::from_response(response).await
    }

    /// Activates a subscription for a type/key pair
    ///
    /// POST /subscriptions
    pub async fn activate_subscription(
        &self,
        subscription_type: SubscriptionType,
        subscription_key: &str,
    ) -> Result<Envelope> {
        self.subscription_action(subscription_type, subscription_key, true)
            .await
    }

    /// Deactivates a subscription for a type/key pair
    ///
    /// POST /subscriptions
    pub async fn deactivate_subscription(
        &self,
        subscription_type: SubscriptionType,
        subscription_key: &str,
    ) -> Result<Envelope> {
        self.subscription_action(subscription_type, subscription_key, false)
            .await
    }

    async fn subscription_action(
        &self,
        subscription_type: SubscriptionType,
        subscription_key: &str,
        active: bool,
    ) -> Result<Envelope> {
        let body = json!({
            "subscription_type": subscription_type,
            "subscription_key": subscription_key,
            "active": active,
        });

        let builder = self.request(Method::POST, "subscriptions")?.json(&body);
        self.send(builder).await
    }

    /// Fetches all subscriptions
    ///
    /// GET /subscriptions
    pub async fn get_subscriptions(&self) -> Result<Envelope> {
        let builder = self.request(Method::GET, "subscriptions")?;
        self.send(builder).await
    }

    /// Fetches one subscription by ID
    ///
    /// GET /subscriptions/{id}
    pub async fn get_subscription_by_id(&self, subscription_id: &str) -> Result<Envelope> {
        let endpoint = format!("subscriptions/{}", subscription_id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send(builder).await
    }

    /// Deletes one subscription by ID
    ///
    /// DELETE /subscriptions/{id}
    pub async fn delete_subscription_by_id(&self, subscription_id: &str) -> Result<Envelope> {
        let endpoint = format!("subscriptions/{}", subscription_id);
        let builder = self.request(Method::DELETE, &endpoint)?;
        self.send(builder).await
    }
}
