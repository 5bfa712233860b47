//! Contact form submission

use serde::Deserialize;

use super::validation::{email, optional, required};
use super::ValidationError;

const MAX_MESSAGE_LEN: usize = 5000;

#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl TryFrom<ContactForm> for ContactInput {
    type Error = ValidationError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required("name", &form.name, 100)?,
            email: email("email", &form.email)?,
            subject: optional("subject", form.subject.as_deref(), 200)?,
            message: required("message", &form.message, MAX_MESSAGE_LEN)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_all_fields() {
        let form = ContactForm {
            name: "Grace".into(),
            email: "GRACE@navy.mil".into(),
            subject: None,
            message: "Let's talk".into(),
        };
        let input = ContactInput::try_from(form).unwrap();
        assert_eq!(input.email, "grace@navy.mil");
    }

    #[test]
    fn empty_message_rejected() {
        let form = ContactForm {
            name: "Grace".into(),
            email: "grace@navy.mil".into(),
            subject: None,
            message: "   ".into(),
        };
        assert!(matches!(
            ContactInput::try_from(form),
            Err(ValidationError::Empty { field: "message" })
        ));
    }
}
