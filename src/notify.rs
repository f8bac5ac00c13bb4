//! Confirmation email helper
//!
//! Best-effort outbound notification via the Resend HTTP API. Sending is
//! fire-and-forget: the signup endpoint spawns the call after a successful
//! insert and never awaits it, and every failure here is logged and
//! discarded. Without an API key the notifier silently no-ops.

use async_trait::async_trait;
use serde_json::json;

use crate::config::AppConfig;

/// Outbound notification service interface
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a confirmation email to `to`, personalized with `name`.
    /// Never fails from the caller's point of view.
    async fn send_confirmation(&self, to: &str, name: &str);
}

/// Resend-backed notifier
pub struct ResendNotifier {
    http: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
    from: String,
    brand: String,
}

impl ResendNotifier {
    /// Build a notifier from application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.email_api_base.clone(),
            api_key: config.email_api_key.clone(),
            from: config.email_from.clone(),
            brand: config.brand_name.clone(),
        }
    }
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn send_confirmation(&self, to: &str, name: &str) {
        let Some(api_key) = &self.api_key else {
            // Silently skip email if not configured
            tracing::debug!("Email API key not configured, skipping confirmation email");
            return;
        };

        let greeting = if name.trim().is_empty() { "there" } else { name };
        let subject = format!("Thanks for signing up for {}!", self.brand);
        let html = format!(
            r#"<div style="font-family: Arial, Helvetica, sans-serif; line-height: 1.6;">
  <h2>Thanks for signing up, {greeting}!</h2>
  <p>We're excited to keep you updated on {brand}. You'll receive product updates at this email.</p>
  <p style="color:#888">If this wasn't you, you can ignore this email.</p>
</div>"#,
            greeting = greeting,
            brand = self.brand,
        );

        let body = json!({
            "from": self.from,
            "to": to,
            "subject": subject,
            "html": html,
        });

        let result = self
            .http
            .post(format!("{}/emails", self.api_base))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(recipient = %to, "Confirmation email accepted");
            }
            Ok(response) => {
                tracing::warn!(
                    recipient = %to,
                    status = %response.status(),
                    "Confirmation email rejected by provider"
                );
            }
            Err(error) => {
                tracing::warn!(recipient = %to, %error, "Confirmation email request failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier_without_key() -> ResendNotifier {
        ResendNotifier::from_config(&AppConfig::default())
    }

    #[tokio::test]
    async fn test_send_without_api_key_is_a_noop() {
        // No API key configured: must return without any network activity.
        // An unroutable api_base would fail the test if a request were made.
        let notifier = ResendNotifier {
            api_base: "http://127.0.0.1:1".to_string(),
            ..notifier_without_key()
        };

        notifier.send_confirmation("ada@example.com", "Ada").await;
    }

    #[tokio::test]
    async fn test_send_failure_is_swallowed() {
        let notifier = ResendNotifier {
            api_base: "http://127.0.0.1:1".to_string(),
            api_key: Some("re_test_key".to_string()),
            ..notifier_without_key()
        };

        // Connection refused; the call must not panic or propagate.
        notifier.send_confirmation("ada@example.com", "Ada").await;
    }
}
