//! Form submission controller.
//!
//! Holds the applicant draft, per-field validation flags, and the status
//! banner, and drives the two-step submit sequence: optional portfolio
//! upload, then one atomic record insert. The two collaborators are
//! injected as traits so the state machine is testable without any
//! network or database.

use std::collections::BTreeSet;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::application::{ApplicationRecord, FieldKey, PortfolioFile, UploadReceipt};

const UPLOAD_FAILED_MESSAGE: &str = "Portfolio upload failed";
const INSERT_FAILED_MESSAGE: &str = "Something went wrong.";

/// Portfolio upload failure. The message is the collaborator's own text
/// and is shown to the user verbatim.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct UploadError {
    pub message: String,
}

impl UploadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Record insert failure. Same message semantics as [`UploadError`].
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct InsertError {
    pub message: String,
}

impl InsertError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Uploads a buffered portfolio file and returns its public URL.
#[async_trait]
pub trait PortfolioUploader: Send + Sync {
    async fn upload(&self, file: &PortfolioFile) -> Result<UploadReceipt, UploadError>;
}

/// Inserts one assembled application record atomically.
#[async_trait]
pub trait ApplicationInserter: Send + Sync {
    async fn insert(&self, record: &ApplicationRecord) -> Result<(), InsertError>;
}

/// The in-progress applicant record. All text fields hold raw user input;
/// trimming happens when the record is assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub name: String,
    pub sc_no: String,
    pub branch: String,
    pub vertical1: String,
    pub vertical2: String,
    pub mob_no: String,
    pub section: String,
    pub mail: String,
    pub portfolio: Option<PortfolioFile>,
}

impl ApplicationDraft {
    fn text_field(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::ScNo => &self.sc_no,
            FieldKey::Branch => &self.branch,
            FieldKey::Vertical1 => &self.vertical1,
            FieldKey::Vertical2 => &self.vertical2,
            FieldKey::MobNo => &self.mob_no,
            FieldKey::Section => &self.section,
            FieldKey::Mail => &self.mail,
            // Not a text field; treated as absent here.
            FieldKey::Portfolio => "",
        }
    }

    fn set_text_field(&mut self, key: FieldKey, value: String) {
        match key {
            FieldKey::Name => self.name = value,
            FieldKey::ScNo => self.sc_no = value,
            FieldKey::Branch => self.branch = value,
            FieldKey::Vertical1 => self.vertical1 = value,
            FieldKey::Vertical2 => self.vertical2 = value,
            FieldKey::MobNo => self.mob_no = value,
            FieldKey::Section => self.section = value,
            FieldKey::Mail => self.mail = value,
            // The portfolio is attached through `attach_portfolio`.
            FieldKey::Portfolio => {}
        }
    }

    /// Required fields whose trimmed value is empty, in field order.
    pub fn missing_required_fields(&self) -> Vec<FieldKey> {
        FieldKey::REQUIRED
            .into_iter()
            .filter(|key| self.text_field(*key).trim().is_empty())
            .collect()
    }

    /// Assemble the final record: trim all text fields and make the
    /// optionals explicit.
    fn to_record(&self, portfolio_url: Option<String>) -> ApplicationRecord {
        let vertical2 = self.vertical2.trim();
        ApplicationRecord {
            name: self.name.trim().to_string(),
            sc_no: self.sc_no.trim().to_string(),
            branch: self.branch.trim().to_string(),
            vertical1: self.vertical1.trim().to_string(),
            vertical2: (!vertical2.is_empty()).then(|| vertical2.to_string()),
            mob_no: self.mob_no.trim().to_string(),
            section: self.section.trim().to_string(),
            mail: self.mail.trim().to_string(),
            portfolio: portfolio_url,
        }
    }
}

/// Set of fields flagged as missing. Recomputed in full on every submit
/// attempt; individual flags clear as the user edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState(BTreeSet<FieldKey>);

impl ValidationState {
    pub fn is_flagged(&self, key: FieldKey) -> bool {
        self.0.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn flagged(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.0.iter().copied()
    }

    fn replace(&mut self, keys: impl IntoIterator<Item = FieldKey>) {
        self.0 = keys.into_iter().collect();
    }

    fn clear_flag(&mut self, key: FieldKey) {
        self.0.remove(&key);
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Status banner state; exactly one variant is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Error(String),
    Success(String),
}

/// Result of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Required fields missing or an attempt already in flight; no I/O
    /// was performed.
    Rejected,
    /// A collaborator failed; the draft is preserved for resubmission.
    Failed,
    /// The record was inserted; the caller navigates to the confirmation
    /// view. `submitting` stays set because the session is done.
    Completed,
}

/// The form controller state machine.
#[derive(Debug, Default)]
pub struct FormController {
    draft: ApplicationDraft,
    validation: ValidationState,
    status: SubmissionStatus,
    submitting: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn validation(&self) -> &ValidationState {
        &self.validation
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Set a draft text field and clear its validation flag if it was set.
    /// `FieldKey::Portfolio` is not a text field and is ignored here.
    pub fn update_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.draft.set_text_field(key, value.into());
        self.validation.clear_flag(key);
    }

    /// Attach or detach the portfolio file. Optional field; no validation.
    pub fn attach_portfolio(&mut self, file: Option<PortfolioFile>) {
        self.draft.portfolio = file;
    }

    /// Reset the draft, validation flags, and status banner.
    pub fn clear(&mut self) {
        self.draft = ApplicationDraft::default();
        self.validation.clear();
        self.status = SubmissionStatus::Idle;
    }

    /// Run one submission attempt: local validation, optional portfolio
    /// upload, then a single atomic insert.
    pub async fn submit(
        &mut self,
        uploader: &dyn PortfolioUploader,
        inserter: &dyn ApplicationInserter,
    ) -> SubmitOutcome {
        // Only one attempt may be in flight at a time.
        if self.submitting {
            return SubmitOutcome::Rejected;
        }

        // Short-circuit path: must run before any I/O.
        let missing = self.draft.missing_required_fields();
        if !missing.is_empty() {
            let labels: Vec<&str> = missing.iter().map(|key| key.label()).collect();
            self.validation.replace(missing);
            self.status = SubmissionStatus::Error(format!(
                "Please fill required fields: {}",
                labels.join(", ")
            ));
            return SubmitOutcome::Rejected;
        }

        self.validation.clear();
        self.submitting = true;
        self.status = SubmissionStatus::Idle;

        let portfolio_url = match &self.draft.portfolio {
            Some(file) => match uploader.upload(file).await {
                Ok(receipt) => Some(receipt.url),
                Err(e) => {
                    tracing::warn!(error = %e, "Portfolio upload failed");
                    self.status = SubmissionStatus::Error(non_empty_or(
                        e.message,
                        UPLOAD_FAILED_MESSAGE,
                    ));
                    self.submitting = false;
                    return SubmitOutcome::Failed;
                }
            },
            None => None,
        };

        let record = self.draft.to_record(portfolio_url);
        if let Err(e) = inserter.insert(&record).await {
            tracing::warn!(error = %e, "Application insert failed");
            self.status = SubmissionStatus::Error(non_empty_or(e.message, INSERT_FAILED_MESSAGE));
            self.submitting = false;
            return SubmitOutcome::Failed;
        }

        // The confirmation view takes over; `submitting` is left set.
        SubmitOutcome::Completed
    }
}

fn non_empty_or(message: String, default: &str) -> String {
    if message.trim().is_empty() {
        default.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use std::sync::{Arc, Mutex};

    struct MockUploader {
        log: Arc<Mutex<Vec<&'static str>>>,
        fail_with: Option<String>,
        url: String,
    }

    impl MockUploader {
        fn new(log: Arc<Mutex<Vec<&'static str>>>) -> Self {
            Self {
                log,
                fail_with: None,
                url: "https://cdn.example.com/portfolio/resume.pdf".to_string(),
            }
        }

        fn failing(log: Arc<Mutex<Vec<&'static str>>>, message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Self::new(log)
            }
        }
    }

    #[async_trait]
    impl PortfolioUploader for MockUploader {
        async fn upload(&self, file: &PortfolioFile) -> Result<UploadReceipt, UploadError> {
            self.log.lock().unwrap().push("upload");
            match &self.fail_with {
                Some(message) => Err(UploadError::new(message.clone())),
                None => Ok(UploadReceipt {
                    url: self.url.clone(),
                    file_id: "file-1".to_string(),
                    file_name: file.file_name.clone(),
                }),
            }
        }
    }

    struct MockInserter {
        log: Arc<Mutex<Vec<&'static str>>>,
        fail_with: Option<String>,
        records: Mutex<Vec<ApplicationRecord>>,
    }

    impl MockInserter {
        fn new(log: Arc<Mutex<Vec<&'static str>>>) -> Self {
            Self {
                log,
                fail_with: None,
                records: Mutex::new(Vec::new()),
            }
        }

        fn failing(log: Arc<Mutex<Vec<&'static str>>>, message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Self::new(log)
            }
        }

        fn inserted(&self) -> Vec<ApplicationRecord> {
            self.records.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ApplicationInserter for MockInserter {
        async fn insert(&self, record: &ApplicationRecord) -> Result<(), InsertError> {
            self.log.lock().unwrap().push("insert");
            match &self.fail_with {
                Some(message) => Err(InsertError::new(message.clone())),
                None => {
                    self.records.lock().unwrap().push(record.clone());
                    Ok(())
                }
            }
        }
    }

    fn collaborators() -> (Arc<Mutex<Vec<&'static str>>>, MockUploader, MockInserter) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (
            log.clone(),
            MockUploader::new(log.clone()),
            MockInserter::new(log),
        )
    }

    fn filled_controller() -> FormController {
        let mut controller = FormController::new();
        controller.update_field(FieldKey::Name, "Asha Verma");
        controller.update_field(FieldKey::ScNo, "231112345");
        controller.update_field(FieldKey::Branch, "Computer Science and Engineering");
        controller.update_field(FieldKey::Vertical1, "web developer");
        controller.update_field(FieldKey::MobNo, "9876543210");
        controller.update_field(FieldKey::Section, "C");
        controller.update_field(FieldKey::Mail, "asha@example.com");
        controller
    }

    fn portfolio_file() -> PortfolioFile {
        PortfolioFile {
            file_name: "resume.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            data: Bytes::from_static(b"%PDF-1.4"),
        }
    }

    #[tokio::test]
    async fn test_empty_draft_flags_all_required_fields_without_io() {
        let (log, uploader, inserter) = collaborators();
        let mut controller = FormController::new();

        let outcome = controller.submit(&uploader, &inserter).await;

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(log.lock().unwrap().is_empty());
        for key in FieldKey::REQUIRED {
            assert!(controller.validation().is_flagged(key));
        }
        assert!(!controller.validation().is_flagged(FieldKey::Vertical2));
        match controller.status() {
            SubmissionStatus::Error(message) => {
                assert!(message.starts_with("Please fill required fields: "));
                assert!(message.contains("Name"));
                assert!(message.contains("Scholar Number"));
            }
            other => panic!("Expected error status, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_mail_only() {
        let (log, uploader, inserter) = collaborators();
        let mut controller = filled_controller();
        controller.update_field(FieldKey::Mail, "   ");

        let outcome = controller.submit(&uploader, &inserter).await;

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(log.lock().unwrap().is_empty());
        assert!(controller.validation().is_flagged(FieldKey::Mail));
        assert_eq!(controller.validation().flagged().count(), 1);
        match controller.status() {
            SubmissionStatus::Error(message) => assert!(message.contains("Email")),
            other => panic!("Expected error status, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_without_portfolio_inserts_once_with_nulls() {
        let (log, uploader, inserter) = collaborators();
        let mut controller = filled_controller();

        let outcome = controller.submit(&uploader, &inserter).await;

        assert_eq!(outcome, SubmitOutcome::Completed);
        assert_eq!(*log.lock().unwrap(), vec!["insert"]);
        let records = inserter.inserted();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].vertical2, None);
        assert_eq!(records[0].portfolio, None);
        assert!(controller.is_submitting());
    }

    #[tokio::test]
    async fn test_portfolio_uploaded_before_insert_and_url_passed_through() {
        let (log, uploader, inserter) = collaborators();
        let mut controller = filled_controller();
        controller.attach_portfolio(Some(portfolio_file()));

        let outcome = controller.submit(&uploader, &inserter).await;

        assert_eq!(outcome, SubmitOutcome::Completed);
        assert_eq!(*log.lock().unwrap(), vec!["upload", "insert"]);
        let records = inserter.inserted();
        assert_eq!(
            records[0].portfolio.as_deref(),
            Some("https://cdn.example.com/portfolio/resume.pdf")
        );
    }

    #[tokio::test]
    async fn test_upload_failure_skips_insert() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let uploader = MockUploader::failing(log.clone(), "bucket unreachable");
        let inserter = MockInserter::new(log.clone());
        let mut controller = filled_controller();
        controller.attach_portfolio(Some(portfolio_file()));

        let outcome = controller.submit(&uploader, &inserter).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(*log.lock().unwrap(), vec!["upload"]);
        assert_eq!(
            *controller.status(),
            SubmissionStatus::Error("bucket unreachable".to_string())
        );
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_upload_failure_with_empty_message_uses_default() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let uploader = MockUploader::failing(log.clone(), "");
        let inserter = MockInserter::new(log);
        let mut controller = filled_controller();
        controller.attach_portfolio(Some(portfolio_file()));

        controller.submit(&uploader, &inserter).await;

        assert_eq!(
            *controller.status(),
            SubmissionStatus::Error("Portfolio upload failed".to_string())
        );
    }

    #[tokio::test]
    async fn test_insert_failure_preserves_draft() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let uploader = MockUploader::new(log.clone());
        let inserter = MockInserter::failing(log, "duplicate");
        let mut controller = filled_controller();

        let outcome = controller.submit(&uploader, &inserter).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(
            *controller.status(),
            SubmissionStatus::Error("duplicate".to_string())
        );
        assert_eq!(controller.draft().name, "Asha Verma");
        assert_eq!(controller.draft().mail, "asha@example.com");
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_clear_resets_everything() {
        let (_, uploader, inserter) = collaborators();
        let mut controller = FormController::new();
        controller.update_field(FieldKey::Name, "Asha");
        controller.attach_portfolio(Some(portfolio_file()));
        controller.submit(&uploader, &inserter).await;

        controller.clear();

        assert_eq!(*controller.draft(), ApplicationDraft::default());
        assert!(controller.validation().is_empty());
        assert_eq!(*controller.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_editing_a_flagged_field_clears_only_its_flag() {
        let (_, uploader, inserter) = collaborators();
        let mut controller = FormController::new();
        controller.submit(&uploader, &inserter).await;
        assert!(controller.validation().is_flagged(FieldKey::Mail));

        controller.update_field(FieldKey::Mail, "asha@example.com");

        assert!(!controller.validation().is_flagged(FieldKey::Mail));
        assert!(controller.validation().is_flagged(FieldKey::Name));
    }

    #[tokio::test]
    async fn test_record_fields_are_trimmed() {
        let (_, uploader, inserter) = collaborators();
        let mut controller = filled_controller();
        controller.update_field(FieldKey::Name, "  Asha Verma  ");
        controller.update_field(FieldKey::Vertical2, "   ");

        controller.submit(&uploader, &inserter).await;

        let records = inserter.inserted();
        assert_eq!(records[0].name, "Asha Verma");
        assert_eq!(records[0].vertical2, None);
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_rejected() {
        let (log, uploader, inserter) = collaborators();
        let mut controller = filled_controller();

        assert_eq!(
            controller.submit(&uploader, &inserter).await,
            SubmitOutcome::Completed
        );
        // `submitting` stays set after completion; a stray second attempt
        // must not reach the collaborators.
        assert_eq!(
            controller.submit(&uploader, &inserter).await,
            SubmitOutcome::Rejected
        );
        assert_eq!(*log.lock().unwrap(), vec!["insert"]);
    }
}
