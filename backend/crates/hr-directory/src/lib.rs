pub mod directory;
pub mod error;
pub mod mail;
pub mod manager_index;
pub mod notifier;

pub use directory::EmployeeDirectory;
pub use error::{DirectoryError, Result};
pub use mail::{
    http_mailer::HttpMailer, log_mailer::LogMailer, mail_message::MailMessage, mailer::Mailer,
};
pub use manager_index::ascend;
pub use notifier::Notifier;
