use crate::{DirectoryError, MailMessage, Mailer, Result as DirectoryErrorResult};

use hr_core::ErrorLocation;

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as ReqwestClient;

/// Delivers messages by POSTing them as JSON to a mail relay.
pub struct HttpMailer {
    relay_url: String,
    client: ReqwestClient,
}

impl HttpMailer {
    pub fn new(relay_url: &str, timeout: Duration) -> DirectoryErrorResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DirectoryError::EmailSending {
                recipient: relay_url.to_string(),
                message: format!("Failed to build HTTP client: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            relay_url: relay_url.to_string(),
            client,
        })
    }

    pub fn relay_url(&self) -> &str {
        &self.relay_url
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &MailMessage) -> DirectoryErrorResult<()> {
        let response = self
            .client
            .post(&self.relay_url)
            .json(message)
            .send()
            .await
            .map_err(|e| DirectoryError::EmailSending {
                recipient: message.to.clone(),
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::EmailSending {
                recipient: message.to.clone(),
                message: format!("Mail relay responded with {}", status),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!("Mail relay accepted message to {}", message.to);
        Ok(())
    }
}
