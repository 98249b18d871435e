//! Local state of the contact form.
//!
//! Submissions never leave the browser: the page waits a fixed delay and then
//! reports the outcome of [`ContactForm::submit`].

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Success,
    Error,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.name.trim().is_empty() {
            return Err(SiteError::MissingField("name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(SiteError::MissingField("email"));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(SiteError::InvalidEmail(email.to_string())),
        }
        if self.message.trim().is_empty() {
            return Err(SiteError::MissingField("message"));
        }
        Ok(())
    }

    /// Completes a simulated submission. A valid form always succeeds and is
    /// cleared, an invalid one is kept so the user can fix it.
    pub fn submit(&mut self) -> SubmissionStatus {
        match self.validate() {
            Ok(()) => {
                log::debug!("contact form accepted for {}", self.email);
                *self = ContactForm::default();
                SubmissionStatus::Success
            }
            Err(err) => {
                log::debug!("contact form rejected: {}", err);
                SubmissionStatus::Error
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields() {
        let mut form = filled();
        form.name = "   ".to_string();
        assert_eq!(form.validate(), Err(SiteError::MissingField("name")));

        let mut form = filled();
        form.message.clear();
        assert_eq!(form.validate(), Err(SiteError::MissingField("message")));
    }

    #[test]
    fn test_invalid_email() {
        let mut form = filled();
        form.email = "not-an-email".to_string();
        assert!(matches!(form.validate(), Err(SiteError::InvalidEmail(_))));

        form.email = "@example.com".to_string();
        assert!(matches!(form.validate(), Err(SiteError::InvalidEmail(_))));
    }

    #[test]
    fn test_successful_submit_clears_form() {
        let mut form = filled();
        assert_eq!(form.submit(), SubmissionStatus::Success);
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_failed_submit_keeps_input() {
        let mut form = filled();
        form.email = "broken".to_string();
        assert_eq!(form.submit(), SubmissionStatus::Error);
        assert_eq!(form.name, "Ada");
    }
}
