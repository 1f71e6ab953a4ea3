use std::collections::HashMap;

use serde::Serialize;

/// What the contact form hands to its transport on submit.
#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    pub message: String,
}

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 80;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 2000;
pub const ORGANIZATION_MAX: usize = 120;

pub fn validate_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        Some("Please enter your name".to_string())
    } else if name.chars().count() < NAME_MIN {
        Some(format!("Name must be at least {} characters", NAME_MIN))
    } else if name.chars().count() > NAME_MAX {
        Some(format!("Name can't be longer than {} characters", NAME_MAX))
    } else {
        None
    }
}

pub fn validate_email(email: &str) -> Option<String> {
    let email = email.trim();
    if email.is_empty() {
        return Some("Please enter your email".to_string());
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains(' ');
    if local.is_empty() || local.contains(' ') || !domain_ok {
        return Some("Enter a valid email address".to_string());
    }
    None
}

/// Organization is optional; only an absurd length is rejected.
pub fn validate_organization(organization: &str) -> Option<String> {
    if organization.trim().chars().count() > ORGANIZATION_MAX {
        Some(format!(
            "Organization can't be longer than {} characters",
            ORGANIZATION_MAX
        ))
    } else {
        None
    }
}

pub fn validate_message(message: &str) -> Option<String> {
    let message = message.trim();
    if message.is_empty() {
        Some("Please tell us about your project".to_string())
    } else if message.chars().count() < MESSAGE_MIN {
        Some(format!(
            "Message must be at least {} characters",
            MESSAGE_MIN
        ))
    } else if message.chars().count() > MESSAGE_MAX {
        Some(format!(
            "Message can't be longer than {} characters",
            MESSAGE_MAX
        ))
    } else {
        None
    }
}

/// Run every field rule and collect the first violation per field.
/// Always data, never a panic or an exception: the form renders these inline.
pub fn validate(payload: &ContactPayload) -> HashMap<&'static str, String> {
    let mut errors = HashMap::new();
    if let Some(msg) = validate_name(&payload.name) {
        errors.insert("name", msg);
    }
    if let Some(msg) = validate_email(&payload.email) {
        errors.insert("email", msg);
    }
    if let Some(org) = &payload.organization {
        if let Some(msg) = validate_organization(org) {
            errors.insert("organization", msg);
        }
    }
    if let Some(msg) = validate_message(&payload.message) {
        errors.insert("message", msg);
    }
    errors
}

/// Submission lifecycle of the contact form.
///
/// `Submitting` is the only in-flight state and doubles as the concurrency
/// guard: `begin` refuses to restart while a submission is pending, and the
/// submit button is disabled for the duration. Success auto-resets to Idle
/// on a timer; Failure stays until the user resubmits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Success,
    Failure,
}

impl SubmitState {
    pub fn can_submit(self) -> bool {
        matches!(self, SubmitState::Idle | SubmitState::Failure)
    }

    pub fn begin(self) -> Self {
        if self.can_submit() {
            SubmitState::Submitting
        } else {
            self
        }
    }

    pub fn finish(self, ok: bool) -> Self {
        match self {
            SubmitState::Submitting if ok => SubmitState::Success,
            SubmitState::Submitting => SubmitState::Failure,
            other => other,
        }
    }

    pub fn reset(self) -> Self {
        match self {
            SubmitState::Success => SubmitState::Idle,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> ContactPayload {
        ContactPayload {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            organization: None,
            message: "Hello there, this is long enough.".to_string(),
        }
    }

    #[test]
    fn one_character_name_is_too_short() {
        let msg = validate_name("A").unwrap();
        assert!(msg.contains("at least 2 characters"), "got: {}", msg);
    }

    #[test]
    fn valid_payload_has_no_errors() {
        assert!(validate(&valid_payload()).is_empty());
    }

    #[test]
    fn errors_accumulate_per_field() {
        let payload = ContactPayload {
            name: "".to_string(),
            email: "not-an-email".to_string(),
            organization: None,
            message: "short".to_string(),
        };
        let errors = validate(&payload);
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("message"));
    }

    #[test]
    fn email_shape_requires_local_and_dotted_domain() {
        assert!(validate_email("jane@x.com").is_none());
        assert!(validate_email("jane+site@studio.co.uk").is_none());
        assert!(validate_email("@x.com").is_some());
        assert!(validate_email("jane@com").is_some());
        assert!(validate_email("jane@x.com ok").is_some());
        assert!(validate_email("jane@.com").is_some());
    }

    #[test]
    fn organization_is_optional_but_bounded() {
        assert!(validate_organization("").is_none());
        assert!(validate_organization("Acme Inc").is_none());
        assert!(validate_organization(&"x".repeat(ORGANIZATION_MAX + 1)).is_some());
    }

    #[test]
    fn happy_path_walks_idle_submitting_success_idle() {
        let state = SubmitState::Idle;
        let state = state.begin();
        assert_eq!(state, SubmitState::Submitting);
        let state = state.finish(true);
        assert_eq!(state, SubmitState::Success);
        assert_eq!(state.reset(), SubmitState::Idle);
    }

    #[test]
    fn begin_is_refused_while_submitting() {
        let state = SubmitState::Submitting;
        assert!(!state.can_submit());
        assert_eq!(state.begin(), SubmitState::Submitting);
    }

    #[test]
    fn failure_stays_until_resubmitted() {
        let state = SubmitState::Submitting.finish(false);
        assert_eq!(state, SubmitState::Failure);
        assert_eq!(state.reset(), SubmitState::Failure);
        assert_eq!(state.begin(), SubmitState::Submitting);
    }

    #[test]
    fn finish_outside_submitting_is_a_no_op() {
        assert_eq!(SubmitState::Idle.finish(true), SubmitState::Idle);
        assert_eq!(SubmitState::Success.finish(false), SubmitState::Success);
    }

    #[test]
    fn payload_serializes_without_empty_organization() {
        let json = serde_json::to_string(&valid_payload()).unwrap();
        assert!(!json.contains("organization"));
        let with_org = ContactPayload {
            organization: Some("Acme Inc".to_string()),
            ..valid_payload()
        };
        assert!(serde_json::to_string(&with_org)
            .unwrap()
            .contains("Acme Inc"));
    }
}
