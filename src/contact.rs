//! Contact-form domain types shared by the page, the relay, and the
//! mailto fallback.

use serde::{Deserialize, Serialize};

/// Note shown under the form when a relayed submission succeeds.
pub const CONFIRMATION_NOTE: &str = "Thanks — we will get back shortly.";

/// Note shown when a relayed submission fails. The same string is used for
/// HTTP error responses and transport failures; the distinction only reaches
/// the logs.
pub const ERROR_NOTE: &str = "Could not submit. You can email us directly.";

/// One submitted inquiry. Field names double as the form field names and the
/// JSON keys sent to the form endpoint.
///
/// `name`, `email`, and `message` are enforced as required by the form markup
/// itself; `company` is optional and may be empty or missing entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    pub message: String,
}

/// Lifecycle of a contact-form submission. Created fresh for every render,
/// never persisted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionState {
    /// The fixed display message carried by this state, if any.
    pub fn note(&self) -> Option<&'static str> {
        match self {
            SubmissionState::Success => Some(CONFIRMATION_NOTE),
            SubmissionState::Error => Some(ERROR_NOTE),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }

    /// The submit control is unavailable exactly while a submission is in
    /// flight.
    pub fn submit_disabled(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Inquiry Tests ====================

    #[test]
    fn test_inquiry_serializes_all_four_fields() {
        let inquiry = Inquiry {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company: "Analytical Engines".to_string(),
            message: "We need an automation copilot.".to_string(),
        };

        let json = serde_json::to_value(&inquiry).expect("serialize");
        assert_eq!(json["name"], "Ada Lovelace");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["company"], "Analytical Engines");
        assert_eq!(json["message"], "We need an automation copilot.");
    }

    #[test]
    fn test_inquiry_company_may_be_absent() {
        let json = r#"{
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello"
        }"#;

        let inquiry: Inquiry = serde_json::from_str(json).expect("deserialize");
        assert_eq!(inquiry.company, "");
    }

    #[test]
    fn test_inquiry_default_is_empty() {
        let inquiry = Inquiry::default();
        assert!(inquiry.name.is_empty());
        assert!(inquiry.email.is_empty());
        assert!(inquiry.company.is_empty());
        assert!(inquiry.message.is_empty());
    }

    // ==================== SubmissionState Tests ====================

    #[test]
    fn test_only_terminal_states_carry_a_note() {
        assert_eq!(SubmissionState::Idle.note(), None);
        assert_eq!(SubmissionState::Submitting.note(), None);
        assert_eq!(SubmissionState::Success.note(), Some(CONFIRMATION_NOTE));
        assert_eq!(SubmissionState::Error.note(), Some(ERROR_NOTE));
    }

    #[test]
    fn test_submit_disabled_only_while_submitting() {
        assert!(!SubmissionState::Idle.submit_disabled());
        assert!(SubmissionState::Submitting.submit_disabled());
        assert!(!SubmissionState::Success.submit_disabled());
        assert!(!SubmissionState::Error.submit_disabled());
    }

    #[test]
    fn test_error_note_is_generic() {
        // The user-facing failure message never includes upstream detail.
        assert!(!ERROR_NOTE.contains("500"));
        assert!(!ERROR_NOTE.contains("http"));
    }
}
