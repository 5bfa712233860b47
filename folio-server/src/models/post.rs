//! Blog post input

use serde::Deserialize;

use super::project::resolve_slug;
use super::validation::{optional, optional_url, required, string_list};
use super::ValidationError;

const MAX_TITLE_LEN: usize = 200;
const MAX_EXCERPT_LEN: usize = 500;
/// 100 KiB of markdown
const MAX_CONTENT_BYTES: usize = 100 * 1024;
const MAX_TAGS: usize = 20;
const MAX_TAG_LEN: usize = 50;
const MAX_SEO_TITLE_LEN: usize = 70;
const MAX_SEO_DESCRIPTION_LEN: usize = 160;

/// Blog post as submitted by the admin UI
#[derive(Debug, Clone, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostInput {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl TryFrom<PostForm> for PostInput {
    type Error = ValidationError;

    fn try_from(form: PostForm) -> Result<Self, Self::Error> {
        let title = required("title", &form.title, MAX_TITLE_LEN)?;
        let slug = resolve_slug(form.slug.as_deref(), &title)?;

        if form.content.len() > MAX_CONTENT_BYTES {
            return Err(ValidationError::TooLong {
                field: "content",
                max: MAX_CONTENT_BYTES,
            });
        }
        // Drafts may be empty; published posts need a body.
        if form.published && form.content.trim().is_empty() {
            return Err(ValidationError::Empty { field: "content" });
        }

        Ok(Self {
            title,
            slug,
            excerpt: optional("excerpt", form.excerpt.as_deref(), MAX_EXCERPT_LEN)?,
            content: form.content,
            cover_image: optional_url("cover_image", form.cover_image.as_deref())?,
            tags: string_list("tags", &form.tags, MAX_TAGS, MAX_TAG_LEN)?,
            published: form.published,
            seo_title: optional("seo_title", form.seo_title.as_deref(), MAX_SEO_TITLE_LEN)?,
            seo_description: optional(
                "seo_description",
                form.seo_description.as_deref(),
                MAX_SEO_DESCRIPTION_LEN,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PostForm {
        PostForm {
            title: "Hello, World!".into(),
            slug: None,
            excerpt: None,
            content: "# Hi".into(),
            cover_image: None,
            tags: vec!["intro".into()],
            published: false,
            seo_title: None,
            seo_description: None,
        }
    }

    #[test]
    fn derives_slug() {
        assert_eq!(PostInput::try_from(form()).unwrap().slug, "hello-world");
    }

    #[test]
    fn draft_may_be_empty_but_published_may_not() {
        let mut f = form();
        f.content = String::new();
        assert!(PostInput::try_from(f.clone()).is_ok());

        f.published = true;
        assert!(matches!(
            PostInput::try_from(f),
            Err(ValidationError::Empty { field: "content" })
        ));
    }

    #[test]
    fn content_size_cap() {
        let mut f = form();
        f.content = "a".repeat(MAX_CONTENT_BYTES + 1);
        assert!(matches!(
            PostInput::try_from(f),
            Err(ValidationError::TooLong { field: "content", .. })
        ));
    }

    #[test]
    fn seo_description_cap() {
        let mut f = form();
        f.seo_description = Some("x".repeat(161));
        assert!(matches!(
            PostInput::try_from(f),
            Err(ValidationError::TooLong { field: "seo_description", max: 160 })
        ));
    }
}
