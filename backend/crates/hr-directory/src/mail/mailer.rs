use crate::{MailMessage, Result as DirectoryErrorResult};

use async_trait::async_trait;

/// Outbound mail transport.
///
/// Failures are reported as `DirectoryError::EmailSending`.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &MailMessage) -> DirectoryErrorResult<()>;
}
