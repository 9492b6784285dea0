#![allow(dead_code)]

use hr_core::{Employee, NewEmployee};
use hr_directory::{
    DirectoryError, EmployeeDirectory, MailMessage, Mailer, Notifier, Result as DirectoryResult,
};

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

pub const TEST_SENDER: &str = "directory@example.com";
pub const TEST_MAX_PAGE_SIZE: i64 = 100;

/// Keeps every message it is asked to send
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<MailMessage>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<MailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &MailMessage) -> DirectoryResult<()> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Fails every send
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, message: &MailMessage) -> DirectoryResult<()> {
        Err(DirectoryError::EmailSending {
            recipient: message.to.clone(),
            message: "relay unavailable".to_string(),
            location: hr_core::ErrorLocation::from(std::panic::Location::caller()),
        })
    }
}

/// Directory over a fresh in-memory database, recording outgoing mail
pub async fn create_test_directory() -> (EmployeeDirectory, Arc<RecordingMailer>) {
    let mailer = Arc::new(RecordingMailer::default());
    let directory = directory_with_mailer(mailer.clone()).await;
    (directory, mailer)
}

pub async fn directory_with_mailer(mailer: Arc<dyn Mailer>) -> EmployeeDirectory {
    let pool = hr_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");
    EmployeeDirectory::new(
        pool,
        Notifier::new(mailer, TEST_SENDER, true),
        TEST_MAX_PAGE_SIZE,
    )
}

/// Directory over a multi-connection database file, notifications off
pub async fn create_file_directory(path: &Path) -> EmployeeDirectory {
    let pool = hr_db::connect(path, 8, Duration::from_secs(5))
        .await
        .expect("Failed to create file-backed pool");
    EmployeeDirectory::new(pool, Notifier::disabled(), TEST_MAX_PAGE_SIZE)
}

/// Valid creation input with an explicit id; email and phone derive from the id
pub fn new_employee(id: &str, reports_to: Option<&str>) -> NewEmployee {
    NewEmployee {
        id: Some(id.to_string()),
        employee_name: format!("Employee {}", id),
        phone_number: "+15551234567".to_string(),
        email: format!("{}@example.com", id),
        reports_to: reports_to.map(String::from),
        profile_image_url: None,
    }
}

/// Create X -> A -> B -> C (C at the top)
pub async fn create_chain(directory: &EmployeeDirectory) -> Vec<Employee> {
    let mut created = Vec::new();
    for (id, manager) in [("c", None), ("b", Some("c")), ("a", Some("b")), ("x", Some("a"))] {
        created.push(directory.create(new_employee(id, manager)).await.unwrap());
    }
    created
}
