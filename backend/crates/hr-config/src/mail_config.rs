use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAIL_FROM, DEFAULT_MAIL_TIMEOUT_SECS,
    MAX_MAIL_TIMEOUT_SECS,
};

use hr_core::is_valid_email;

use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// Manager notification settings.
///
/// With `relay_url` unset, notifications are written to the log instead of sent.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub enabled: bool,
    pub from: String,
    pub relay_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            from: String::from(DEFAULT_MAIL_FROM),
            relay_url: None,
            timeout_secs: DEFAULT_MAIL_TIMEOUT_SECS,
        }
    }
}

impl MailConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if !is_valid_email(&self.from) {
            return Err(ConfigError::mail(format!(
                "mail.from must be an email address, got '{}'",
                self.from
            )));
        }

        if let Some(relay_url) = &self.relay_url {
            let url = Url::parse(relay_url).map_err(|e| {
                ConfigError::mail(format!("mail.relay_url is not a valid URL: {}", e))
            })?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(ConfigError::mail(format!(
                    "mail.relay_url must use http or https, got '{}'",
                    url.scheme()
                )));
            }
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_MAIL_TIMEOUT_SECS {
            return Err(ConfigError::mail(format!(
                "mail.timeout_secs must be 1-{}, got {}",
                MAX_MAIL_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
