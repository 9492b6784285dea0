use crate::{MailMessage, Mailer, Result as DirectoryErrorResult};

use async_trait::async_trait;
use log::info;

/// Writes messages to the log instead of delivering them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &MailMessage) -> DirectoryErrorResult<()> {
        info!(
            "Mail to {} from {}: [{}] {}",
            message.to, message.from, message.subject, message.body
        );
        Ok(())
    }
}
