use crate::{LogMailer, MailMessage, Mailer, Result as DirectoryErrorResult};

use hr_core::Employee;

use std::sync::Arc;

use log::warn;

const NEW_REPORT_SUBJECT: &str = "New Employee Notification";

/// Tells a manager that someone now reports to them.
#[derive(Clone)]
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
    from: String,
    enabled: bool,
}

impl Notifier {
    pub fn new(mailer: Arc<dyn Mailer>, from: impl Into<String>, enabled: bool) -> Self {
        Self {
            mailer,
            from: from.into(),
            enabled,
        }
    }

    /// A notifier that never sends anything.
    pub fn disabled() -> Self {
        Self::new(Arc::new(LogMailer), String::new(), false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub async fn notify_new_report(
        &self,
        manager: &Employee,
        employee: &Employee,
    ) -> DirectoryErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if manager.email.trim().is_empty() {
            warn!(
                "Manager {} has no email address, skipping notification for {}",
                manager.id, employee.id
            );
            return Ok(());
        }

        let message = self.new_report_message(manager, employee);
        self.mailer.send(&message).await
    }

    pub fn new_report_message(&self, manager: &Employee, employee: &Employee) -> MailMessage {
        MailMessage {
            from: self.from.clone(),
            to: manager.email.clone(),
            subject: NEW_REPORT_SUBJECT.to_string(),
            body: format!(
                "{} will now work under you. Mobile: {}, Email: {}",
                employee.employee_name, employee.phone_number, employee.email
            ),
        }
    }
}
