//! Site owner profile (singleton)

use serde::Deserialize;

use super::validation::{email, optional, optional_url, required};
use super::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub title: String,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub available_for_work: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileInput {
    pub name: String,
    pub title: String,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub available_for_work: bool,
}

impl TryFrom<ProfileForm> for ProfileInput {
    type Error = ValidationError;

    fn try_from(form: ProfileForm) -> Result<Self, Self::Error> {
        let email = match form.email.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(e) => Some(email("email", e)?),
        };

        Ok(Self {
            name: required("name", &form.name, 100)?,
            title: required("title", &form.title, 200)?,
            tagline: optional("tagline", form.tagline.as_deref(), 300)?,
            bio: optional("bio", form.bio.as_deref(), 5000)?,
            avatar_url: optional_url("avatar_url", form.avatar_url.as_deref())?,
            location: optional("location", form.location.as_deref(), 200)?,
            email,
            available_for_work: form.available_for_work,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_email_is_none_bad_email_rejected() {
        let mut form = ProfileForm {
            name: "Ada".into(),
            title: "Engineer".into(),
            tagline: None,
            bio: None,
            avatar_url: None,
            location: None,
            email: Some(" ".into()),
            available_for_work: true,
        };
        assert_eq!(ProfileInput::try_from(form.clone()).unwrap().email, None);

        form.email = Some("nope".into());
        assert!(ProfileInput::try_from(form).is_err());
    }
}
