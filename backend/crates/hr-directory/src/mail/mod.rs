pub mod http_mailer;
pub mod log_mailer;
pub mod mail_message;
pub mod mailer;
