//! Contact Form
//!
//! Pure state machine for the contact page. The UI feeds it messages and
//! executes the returned effects (timers, toasts).

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ContactTiming;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Collaboration,
    Sponsorship,
    Feedback,
    Question,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Collaboration,
        Subject::Sponsorship,
        Subject::Feedback,
        Subject::Question,
        Subject::Other,
    ];

    /// `<option value=...>`
    pub fn value(self) -> &'static str {
        match self {
            Subject::Collaboration => "collaboration",
            Subject::Sponsorship => "sponsorship",
            Subject::Feedback => "feedback",
            Subject::Question => "question",
            Subject::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Subject::Collaboration => "Collaboration",
            Subject::Sponsorship => "Sponsorship",
            Subject::Feedback => "Feedback",
            Subject::Question => "General Question",
            Subject::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Subject> {
        Subject::ALL.into_iter().find(|s| s.value() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    Required(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Unknown subject: {0}")]
    UnknownSubject(String),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required(field) => *field,
            ValidationError::InvalidEmail => Field::Email,
            ValidationError::UnknownSubject(_) => Field::Subject,
        }
    }
}

/// Raw field values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    /// `<select>` value, empty until a topic is picked
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Collect every problem, in field order
    pub fn validate(&self) -> Result<Subject, Vec<ValidationError>> {
        let mut errors = Vec::new();

        for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
            if self.get(field).trim().is_empty() {
                errors.push(ValidationError::Required(field));
                continue;
            }
            match field {
                Field::Email if !is_valid_email(self.email.trim()) => {
                    errors.push(ValidationError::InvalidEmail);
                }
                Field::Subject if Subject::from_value(self.subject.trim()).is_none() => {
                    errors.push(ValidationError::UnknownSubject(self.subject.clone()));
                }
                _ => {}
            }
        }

        match Subject::from_value(self.subject.trim()) {
            Some(subject) if errors.is_empty() => Ok(subject),
            _ => Err(errors),
        }
    }
}

/// Same shape check a browser does for `type="email"`: one `@`, something
/// before it, a dotted domain after it, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactState {
    pub form: ContactForm,
    pub phase: SubmitPhase,
    pub errors: Vec<ValidationError>,
}

impl ContactState {
    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    pub fn is_busy(&self) -> bool {
        self.phase != SubmitPhase::Editing
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactMsg {
    FieldChanged(Field, String),
    Submit,
    /// The simulated delivery delay elapsed.
    DeliveryFinished,
    /// The success banner has been shown long enough.
    ResetElapsed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEffect {
    /// Wait `delay`, then send `DeliveryFinished`.
    SimulateDelivery { delay: Duration },
    ShowToast { title: String, description: String },
    /// Wait `delay`, then send `ResetElapsed`.
    ScheduleReset { delay: Duration },
}

/// Apply a message to the contact state and return the effects to run.
pub fn update(mut state: ContactState, msg: ContactMsg, timing: &ContactTiming) -> (ContactState, Vec<ContactEffect>) {
    let effects = match msg {
        ContactMsg::FieldChanged(field, value) => {
            if state.phase == SubmitPhase::Editing {
                state.form.set(field, value);
                state.errors.retain(|e| e.field() != field);
            }
            Vec::new()
        }
        ContactMsg::Submit => {
            if state.phase != SubmitPhase::Editing {
                log::debug!("contact submit ignored in {:?}", state.phase);
                return (state, Vec::new());
            }
            match state.form.validate() {
                Ok(subject) => {
                    log::info!("contact form accepted (subject={})", subject.value());
                    state.errors.clear();
                    state.phase = SubmitPhase::Submitting;
                    vec![ContactEffect::SimulateDelivery {
                        delay: Duration::from_millis(timing.submit_delay_ms),
                    }]
                }
                Err(errors) => {
                    log::debug!("contact form rejected: {} error(s)", errors.len());
                    state.errors = errors;
                    Vec::new()
                }
            }
        }
        ContactMsg::DeliveryFinished => {
            if state.phase == SubmitPhase::Submitting {
                state.phase = SubmitPhase::Submitted;
                vec![
                    ContactEffect::ShowToast {
                        title: "Message sent!".to_string(),
                        description: "Thanks for reaching out. I'll get back to you soon.".to_string(),
                    },
                    ContactEffect::ScheduleReset {
                        delay: Duration::from_millis(timing.reset_delay_ms),
                    },
                ]
            } else {
                Vec::new()
            }
        }
        ContactMsg::ResetElapsed => {
            if state.phase == SubmitPhase::Submitted {
                state = ContactState::default();
            }
            Vec::new()
        }
    };

    (state, effects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "feedback".into(),
            message: "Love the horror channel".into(),
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("hello@rajhub.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
        assert!(!is_valid_email("hello"));
        assert!(!is_valid_email("@rajhub.com"));
        assert!(!is_valid_email("hello@rajhub"));
        assert!(!is_valid_email("hello@rajhub."));
        assert!(!is_valid_email("he llo@rajhub.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(filled().validate(), Ok(Subject::Feedback));
    }

    #[test]
    fn test_validate_all_missing() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::Required(Field::Name),
                ValidationError::Required(Field::Email),
                ValidationError::Required(Field::Subject),
                ValidationError::Required(Field::Message),
            ]
        );
    }

    #[test]
    fn test_validate_bad_email_and_subject() {
        let form = ContactForm {
            email: "not-an-email".into(),
            subject: "spam".into(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidEmail, ValidationError::UnknownSubject("spam".into())]
        );
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let form = ContactForm { name: "   ".into(), ..filled() };
        assert_eq!(form.validate().unwrap_err(), vec![ValidationError::Required(Field::Name)]);
    }

    #[test]
    fn test_error_message() {
        assert_eq!(ValidationError::Required(Field::Email).to_string(), "Email is required");
    }
}
