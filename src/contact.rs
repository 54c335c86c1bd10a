use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::notify::NotificationDraft;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

// Local part and domain labels; leading dots and ".." are rejected separately.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern should compile")
});

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Checks the shape of the form. Shared by the browser and the server.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors = FieldErrors {
            name: (self.name.chars().count() < NAME_MIN_CHARS)
                .then(|| "Please enter at least 2 characters.".to_string()),
            email: (!is_valid_email(&self.email))
                .then(|| "That email looks off, mind double checking?".to_string()),
            message: (self.message.chars().count() < MESSAGE_MIN_CHARS)
                .then(|| "Tell me a bit more so I can prep insights.".to_string()),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Body returned by the contact endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactResponse {
    pub fn sent() -> Self {
        Self {
            ok: true,
            ..Default::default()
        }
    }

    pub fn invalid(errors: FieldErrors) -> Self {
        Self {
            ok: false,
            errors: Some(errors),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            errors: None,
            message: Some(message.into()),
        }
    }
}

/// Client side state of the contact form between keystrokes and replies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl ContactState {
    /// Validates the form before anything is sent.
    ///
    /// Returns the payload to submit, or `None` when local validation failed
    /// (errors are then shown inline and nothing goes over the network).
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.submitting {
            return None;
        }
        if let Err(errors) = self.form.validate() {
            self.errors = errors;
            return None;
        }
        self.errors = FieldErrors::default();
        self.submitting = true;
        Some(self.form.clone())
    }

    /// Applies the endpoint's reply and returns the notification to show.
    pub fn finish<E>(&mut self, result: Result<ContactResponse, E>) -> NotificationDraft {
        self.submitting = false;
        match result {
            Ok(res) if res.ok => {
                self.form = ContactForm::default();
                self.errors = FieldErrors::default();
                NotificationDraft::success("Message sent!")
                    .with_description("Thanks for reaching out, I will reply within 1-2 days.")
            }
            Ok(res) => {
                self.errors = res.errors.unwrap_or_default();
                NotificationDraft::info("Message not sent.").with_description(
                    res.message
                        .unwrap_or_else(|| "Mind reviewing the fields marked in red?".to_string()),
                )
            }
            Err(_) => NotificationDraft::info("Something went wrong")
                .with_description("Could you try again in a moment or email me directly?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Variant;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn valid_form() -> ContactForm {
        form("Ada", "ada@example.com", "Let's build something together.")
    }

    #[test]
    fn test_email_validation() {
        for ok in [
            "ada@example.com",
            "first.last+tag@sub.example.co",
            "o'neil@example.org",
            "UPPER@EXAMPLE.COM",
        ] {
            assert!(is_valid_email(ok), "{ok} should be valid");
        }
        for bad in [
            "bad",
            "",
            "@example.com",
            "ada@",
            "ada@example",
            "ada@example.c",
            ".ada@example.com",
            "a..da@example.com",
            "ada@-example.com",
            "ada example@example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_validate_accepts_valid_form() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_length_rules_count_chars() {
        let errors = form("A", "ada@example.com", "123456789").validate().unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.message.is_some());
        assert!(errors.email.is_none());

        // two characters, more than two bytes
        assert_eq!(form("Zé", "ze@example.com", "0123456789").validate(), Ok(()));
    }

    #[test]
    fn test_invalid_submission_makes_no_request() {
        let mut state = ContactState {
            form: form("Al", "bad", "hi"),
            ..Default::default()
        };
        assert_eq!(state.begin_submit(), None);
        assert!(!state.submitting);
        assert_eq!(state.errors.get(Field::Name), None);
        assert!(state.errors.get(Field::Email).is_some());
        assert!(state.errors.get(Field::Message).is_some());
        // input is kept for correction
        assert_eq!(state.form.field(Field::Name), "Al");
    }

    #[test]
    fn test_successful_submission_resets_form() {
        let mut state = ContactState {
            form: valid_form(),
            errors: FieldErrors {
                name: Some("stale".to_string()),
                ..Default::default()
            },
            submitting: false,
        };
        let payload = state.begin_submit().unwrap();
        assert_eq!(payload, valid_form());
        assert!(state.submitting);
        assert!(state.errors.is_empty());

        let draft = state.finish::<()>(Ok(ContactResponse::sent()));
        assert_eq!(draft.variant, Variant::Success);
        assert_eq!(state.form, ContactForm::default());
        assert!(state.errors.is_empty());
        assert!(!state.submitting);
    }

    #[test]
    fn test_no_double_submit_while_in_flight() {
        let mut state = ContactState {
            form: valid_form(),
            ..Default::default()
        };
        assert!(state.begin_submit().is_some());
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn test_rejected_submission_keeps_form() {
        let mut state = ContactState {
            form: valid_form(),
            ..Default::default()
        };
        state.begin_submit();
        let draft = state.finish::<()>(Ok(ContactResponse::invalid(FieldErrors {
            email: Some("Please provide a valid email.".to_string()),
            ..Default::default()
        })));
        assert_eq!(draft.variant, Variant::Info);
        assert_eq!(
            draft.description.as_deref(),
            Some("Mind reviewing the fields marked in red?")
        );
        assert_eq!(
            state.errors.get(Field::Email),
            Some("Please provide a valid email.")
        );
        assert_eq!(state.form, valid_form());
        assert!(!state.submitting);
    }

    #[test]
    fn test_server_message_is_surfaced() {
        let mut state = ContactState {
            form: valid_form(),
            ..Default::default()
        };
        state.begin_submit();
        let draft = state.finish::<()>(Ok(ContactResponse::failed("not configured")));
        assert_eq!(draft.variant, Variant::Info);
        assert_eq!(draft.description.as_deref(), Some("not configured"));
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_transport_error_notifies_once() {
        let mut state = ContactState {
            form: valid_form(),
            ..Default::default()
        };
        state.begin_submit();
        let draft = state.finish(Err("connection reset"));
        assert_eq!(draft.title, "Something went wrong");
        assert_eq!(draft.variant, Variant::Info);
        assert_eq!(state.form, valid_form());
        assert!(!state.submitting);
    }

    #[test]
    fn test_response_shape() {
        assert_eq!(
            serde_json::to_string(&ContactResponse::sent()).unwrap(),
            r#"{"ok":true}"#
        );
        let res: ContactResponse =
            serde_json::from_str(r#"{"ok":false,"errors":{"message":"too short"}}"#).unwrap();
        assert!(!res.ok);
        assert_eq!(
            res.errors.unwrap().get(Field::Message),
            Some("too short")
        );
        assert_eq!(res.message, None);
    }
}
