use std::env;

use thiserror::Error;

use crate::contact::{ContactForm, ContactResponse};

pub const DEFAULT_SENDER: &str = "onboarding@resend.dev";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Contact channel is not configured. Please try emailing me directly.")]
    NotConfigured,
    #[error("Couldn't deliver message: {0}")]
    Delivery(String),
}

/// Where contact messages go. Read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub recipient: Option<String>,
    pub sender: String,
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            recipient: non_empty("CONTACT_RECIPIENT_EMAIL").or_else(|| non_empty("CONTACT_INBOX_EMAIL")),
            sender: non_empty("CONTACT_FROM_EMAIL").unwrap_or_else(|| DEFAULT_SENDER.to_string()),
        }
    }
}

pub trait ContactRelay: Send + Sync {
    fn deliver(&self, form: &ContactForm) -> Result<(), RelayError>;
}

pub fn subject(form: &ContactForm) -> String {
    format!("New portfolio contact from {}", form.name)
}

/// Relay that records each message in the server log.
#[derive(Debug, Clone)]
pub struct LogRelay {
    config: RelayConfig,
}

impl LogRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }
}

impl ContactRelay for LogRelay {
    fn deliver(&self, form: &ContactForm) -> Result<(), RelayError> {
        let recipient = self
            .config
            .recipient
            .as_deref()
            .ok_or(RelayError::NotConfigured)?;
        tracing::info!(
            from = %self.config.sender,
            to = recipient,
            reply_to = %form.email,
            subject = %subject(form),
            body_chars = form.message.chars().count(),
            "contact message relayed"
        );
        Ok(())
    }
}

/// Validates a submission and hands it to the relay.
pub fn handle_submission(relay: &dyn ContactRelay, form: ContactForm) -> ContactResponse {
    if let Err(errors) = form.validate() {
        tracing::debug!(?errors, "rejected contact submission");
        return ContactResponse::invalid(errors);
    }
    match relay.deliver(&form) {
        Ok(()) => ContactResponse::sent(),
        Err(e) => {
            tracing::error!(error = %e, "contact form error");
            ContactResponse::failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    struct Recording {
        sent: Mutex<Vec<ContactForm>>,
        fail_with: Option<RelayError>,
    }

    impl Recording {
        fn new(fail_with: Option<RelayError>) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_with,
            }
        }
    }

    impl ContactRelay for Recording {
        fn deliver(&self, form: &ContactForm) -> Result<(), RelayError> {
            if let Some(e) = &self.fail_with {
                return Err(e.clone());
            }
            self.sent.lock().unwrap().push(form.clone());
            Ok(())
        }
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Let's build something together.".to_string(),
        }
    }

    fn config(vars: &[(&str, &str)]) -> RelayConfig {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        RelayConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let c = config(&[]);
        assert_eq!(c.recipient, None);
        assert_eq!(c.sender, DEFAULT_SENDER);
    }

    #[test]
    fn test_config_recipient_fallback() {
        let c = config(&[("CONTACT_INBOX_EMAIL", "inbox@example.com")]);
        assert_eq!(c.recipient.as_deref(), Some("inbox@example.com"));

        let c = config(&[
            ("CONTACT_INBOX_EMAIL", "inbox@example.com"),
            ("CONTACT_RECIPIENT_EMAIL", "me@example.com"),
            ("CONTACT_FROM_EMAIL", "site@example.com"),
        ]);
        assert_eq!(c.recipient.as_deref(), Some("me@example.com"));
        assert_eq!(c.sender, "site@example.com");

        let c = config(&[("CONTACT_RECIPIENT_EMAIL", "  ")]);
        assert_eq!(c.recipient, None);
    }

    #[test]
    fn test_invalid_submission_is_not_relayed() {
        let relay = Recording::new(None);
        let mut form = valid_form();
        form.email = "bad".to_string();
        let res = handle_submission(&relay, form);
        assert!(!res.ok);
        assert!(res.errors.unwrap().email.is_some());
        assert!(relay.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_valid_submission_is_relayed() {
        let relay = Recording::new(None);
        let res = handle_submission(&relay, valid_form());
        assert_eq!(res, ContactResponse::sent());
        assert_eq!(*relay.sent.lock().unwrap(), vec![valid_form()]);
    }

    #[test]
    fn test_relay_failure_becomes_message() {
        let relay = Recording::new(Some(RelayError::Delivery("timeout".to_string())));
        let res = handle_submission(&relay, valid_form());
        assert!(!res.ok);
        assert_eq!(res.message.as_deref(), Some("Couldn't deliver message: timeout"));
    }

    #[test]
    fn test_log_relay_requires_recipient() {
        let res = handle_submission(&LogRelay::new(config(&[])), valid_form());
        assert!(!res.ok);
        assert_eq!(res.message, Some(RelayError::NotConfigured.to_string()));

        let relay = LogRelay::new(config(&[("CONTACT_RECIPIENT_EMAIL", "me@example.com")]));
        assert!(handle_submission(&relay, valid_form()).ok);
    }

    #[test]
    fn test_subject_names_sender() {
        assert_eq!(subject(&valid_form()), "New portfolio contact from Ada");
    }
}
