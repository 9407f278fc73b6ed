//! Outbound delivery.
//!
//! Every notification is printed to stdout. When a webhook URL is configured
//! it is also posted once as `{"content": "..."}`; failures are logged and
//! forgotten.

use std::time::Duration;

use relay::{Notification, WebhookConfig};
use serde::Serialize;
use tracing::{debug, warn};

use crate::poller::USER_AGENT;

/// Body of a webhook post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookMessage<'a> {
    pub content: &'a str,
}

/// Destination for rendered notifications.
#[allow(async_fn_in_trait)]
pub trait Sink {
    /// Delivers one notification. Delivery problems are not reported back.
    async fn deliver(&self, notification: &Notification);
}

/// Prints notifications and posts them to a chat webhook.
#[derive(Debug, Clone)]
pub struct WebhookSender {
    client: reqwest::Client,
    url: Option<String>,
    timeout: Option<Duration>,
}

impl WebhookSender {
    /// Creates a sender from the webhook settings.
    pub fn new(config: &WebhookConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            url: config.is_enabled().then(|| config.url.trim().to_string()),
            timeout: (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs)),
        })
    }

    /// True when notifications are posted, not just printed.
    pub fn is_posting(&self) -> bool {
        self.url.is_some()
    }

    async fn post(&self, url: &str, content: &str) {
        let mut request = self.client.post(url).json(&WebhookMessage { content });
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                debug!(status = %response.status(), "Webhook accepted message");
            }
            Ok(response) => {
                warn!(status = %response.status(), "Webhook rejected message");
            }
            Err(e) => {
                warn!(error = %e, "Webhook delivery failed");
            }
        }
    }
}

impl Sink for WebhookSender {
    async fn deliver(&self, notification: &Notification) {
        println!("{}", notification.content);
        if let Some(url) = &self.url {
            self.post(url, &notification.content).await;
        }
    }
}
