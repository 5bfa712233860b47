//! Project input

use folio_core::slug::{is_slug, slugify, MAX_SLUG_LEN};
use serde::Deserialize;

use super::validation::{optional_url, required, string_list};
use super::ValidationError;

const MAX_TITLE_LEN: usize = 200;
const MAX_DESCRIPTION_LEN: usize = 5000;
const MAX_TECH_ITEMS: usize = 20;
const MAX_TECH_LEN: usize = 50;

/// Resolve an explicit slug or derive one from `title`.
pub(crate) fn resolve_slug(explicit: Option<&str>, title: &str) -> Result<String, ValidationError> {
    match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) if s.len() > MAX_SLUG_LEN => Err(ValidationError::TooLong {
            field: "slug",
            max: MAX_SLUG_LEN,
        }),
        Some(s) if !is_slug(s) => Err(ValidationError::InvalidFormat {
            field: "slug",
            reason: "must be lowercase alphanumeric words separated by single hyphens",
        }),
        Some(s) => Ok(s.to_owned()),
        None => {
            let derived = slugify(title);
            if derived.is_empty() {
                Err(ValidationError::InvalidFormat {
                    field: "slug",
                    reason: "title has no characters usable in a slug; provide one explicitly",
                })
            } else {
                Ok(derived)
            }
        }
    }
}

/// Project as submitted by the admin UI
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectForm {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInput {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub featured: bool,
    pub display_order: i32,
}

impl TryFrom<ProjectForm> for ProjectInput {
    type Error = ValidationError;

    fn try_from(form: ProjectForm) -> Result<Self, Self::Error> {
        let title = required("title", &form.title, MAX_TITLE_LEN)?;
        let slug = resolve_slug(form.slug.as_deref(), &title)?;

        Ok(Self {
            slug,
            title,
            description: required("description", &form.description, MAX_DESCRIPTION_LEN)?,
            tech_stack: string_list("tech_stack", &form.tech_stack, MAX_TECH_ITEMS, MAX_TECH_LEN)?,
            image_url: optional_url("image_url", form.image_url.as_deref())?,
            live_url: optional_url("live_url", form.live_url.as_deref())?,
            repo_url: optional_url("repo_url", form.repo_url.as_deref())?,
            featured: form.featured,
            display_order: form.display_order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProjectForm {
        ProjectForm {
            title: "Portfolio Engine".into(),
            slug: None,
            description: "A site".into(),
            tech_stack: vec!["Rust".into(), "Postgres".into()],
            image_url: None,
            live_url: Some("https://example.com".into()),
            repo_url: Some(" ".into()),
            featured: true,
            display_order: 0,
        }
    }

    #[test]
    fn derives_slug_from_title() {
        let input = ProjectInput::try_from(form()).unwrap();
        assert_eq!(input.slug, "portfolio-engine");
        assert_eq!(input.repo_url, None);
        assert_eq!(input.tech_stack, vec!["Rust", "Postgres"]);
    }

    #[test]
    fn keeps_explicit_slug() {
        let mut f = form();
        f.slug = Some("custom-1".into());
        assert_eq!(ProjectInput::try_from(f).unwrap().slug, "custom-1");
    }

    #[test]
    fn rejects_malformed_slug() {
        let mut f = form();
        f.slug = Some("Not A Slug".into());
        assert!(matches!(
            ProjectInput::try_from(f),
            Err(ValidationError::InvalidFormat { field: "slug", .. })
        ));
    }

    #[test]
    fn rejects_unsluggable_title_without_slug() {
        let mut f = form();
        f.title = "???".into();
        assert!(ProjectInput::try_from(f).is_err());
    }

    #[test]
    fn rejects_non_http_link() {
        let mut f = form();
        f.live_url = Some("javascript:alert(1)".into());
        assert!(matches!(
            ProjectInput::try_from(f),
            Err(ValidationError::InvalidFormat { field: "live_url", .. })
        ));
    }
}
