//! Social link input

use serde::Deserialize;

use super::validation::{optional, required, url};
use super::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct SocialForm {
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialInput {
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
    pub display_order: i32,
}

impl TryFrom<SocialForm> for SocialInput {
    type Error = ValidationError;

    fn try_from(form: SocialForm) -> Result<Self, Self::Error> {
        Ok(Self {
            platform: required("platform", &form.platform, 50)?,
            url: url("url", &form.url)?,
            icon: optional("icon", form.icon.as_deref(), 200)?,
            display_order: form.display_order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_http_url() {
        let form = SocialForm {
            platform: "GitHub".into(),
            url: "github.com/me".into(),
            icon: None,
            display_order: 0,
        };
        assert!(matches!(
            SocialInput::try_from(form),
            Err(ValidationError::InvalidFormat { field: "url", .. })
        ));
    }
}
