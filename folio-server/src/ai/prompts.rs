//! Prompt assembly for blog drafts and SEO suggestions

use serde::{Deserialize, Serialize};

use crate::models::validation::{required, string_list};
use crate::models::ValidationError;

pub const BLOG_SYSTEM_PROMPT: &str = "You are a technical writer helping a software engineer \
maintain their personal blog. Write in clear, direct prose using Markdown. Respond with a \
single JSON object and nothing else.";

pub const SEO_SYSTEM_PROMPT: &str = "You are an SEO specialist. Suggest metadata that is \
accurate to the article and avoids clickbait. Respond with a single JSON object and nothing else.";

/// Characters of article body forwarded for SEO analysis
const MAX_SEO_CONTENT_CHARS: usize = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftLength {
    Short,
    Medium,
    Long,
}

impl DraftLength {
    /// Approximate target word count
    pub fn words(self) -> u32 {
        match self {
            Self::Short => 400,
            Self::Medium => 800,
            Self::Long => 1500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogDraftRequest {
    pub topic: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub tone: Option<String>,
    pub audience: Option<String>,
    pub length: Option<DraftLength>,
    /// Free-form outline or points the author wants covered
    pub notes: Option<String>,
}

impl BlogDraftRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("topic", &self.topic, 300)?;
        string_list("keywords", &self.keywords, 20, 50)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeoRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl SeoRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("title", &self.title, 200)?;
        required("content", &self.content, usize::MAX)?;
        string_list("keywords", &self.keywords, 20, 50)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoSuggestion {
    pub seo_title: String,
    pub seo_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub slug: String,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn keyword_line(keywords: &[String]) -> Option<String> {
    let kept: Vec<&str> = keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect();
    (!kept.is_empty()).then(|| kept.join(", "))
}

/// Cut `s` to at most `max` characters without splitting a code point.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

pub fn blog_draft(req: &BlogDraftRequest) -> String {
    let mut prompt = format!("Write a blog post about: {}\n", req.topic.trim());

    if let Some(keywords) = keyword_line(&req.keywords) {
        prompt.push_str(&format!("Work in these keywords naturally: {}\n", keywords));
    }
    if let Some(tone) = non_blank(&req.tone) {
        prompt.push_str(&format!("Tone: {}\n", tone));
    }
    if let Some(audience) = non_blank(&req.audience) {
        prompt.push_str(&format!("Target audience: {}\n", audience));
    }
    if let Some(length) = req.length {
        prompt.push_str(&format!("Length: about {} words\n", length.words()));
    }
    if let Some(notes) = non_blank(&req.notes) {
        prompt.push_str(&format!("Cover these points:\n{}\n", notes));
    }

    prompt.push_str(
        "\nReturn JSON with keys \"title\" (string), \"excerpt\" (one or two sentences), \
         \"content\" (Markdown body without the title) and \"tags\" (array of up to 5 lowercase strings).",
    );
    prompt
}

pub fn seo(req: &SeoRequest) -> String {
    let mut prompt = format!(
        "Article title: {}\n\nArticle content:\n{}\n",
        req.title.trim(),
        truncate_chars(req.content.trim(), MAX_SEO_CONTENT_CHARS)
    );

    if let Some(keywords) = keyword_line(&req.keywords) {
        prompt.push_str(&format!("\nFocus keywords: {}\n", keywords));
    }

    prompt.push_str(
        "\nReturn JSON with keys \"seo_title\" (at most 60 characters), \"seo_description\" \
         (at most 155 characters), \"keywords\" (array of 5-10 strings) and \"slug\" \
         (lowercase words joined by hyphens).",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare() -> BlogDraftRequest {
        BlogDraftRequest {
            topic: "  Error handling in Rust ".into(),
            keywords: vec![],
            tone: None,
            audience: None,
            length: None,
            notes: None,
        }
    }

    #[test]
    fn minimal_prompt_has_only_topic() {
        let p = blog_draft(&bare());
        assert!(p.starts_with("Write a blog post about: Error handling in Rust\n"));
        assert!(!p.contains("Tone:"));
        assert!(!p.contains("keywords"));
        assert!(!p.contains("Length:"));
        assert!(p.contains("\"tags\""));
    }

    #[test]
    fn optional_fragments_are_included() {
        let mut req = bare();
        req.keywords = vec!["thiserror".into(), " ".into(), "anyhow".into()];
        req.tone = Some("casual".into());
        req.audience = Some("  ".into());
        req.length = Some(DraftLength::Long);
        req.notes = Some("- ? operator".into());

        let p = blog_draft(&req);
        assert!(p.contains("Work in these keywords naturally: thiserror, anyhow\n"));
        assert!(p.contains("Tone: casual\n"));
        assert!(!p.contains("Target audience"));
        assert!(p.contains("about 1500 words"));
        assert!(p.contains("- ? operator"));
    }

    #[test]
    fn seo_truncates_long_content_on_char_boundary() {
        let req = SeoRequest {
            title: "T".into(),
            content: "é".repeat(MAX_SEO_CONTENT_CHARS + 50),
            keywords: vec!["rust".into()],
        };
        let p = seo(&req);
        assert_eq!(p.matches('é').count(), MAX_SEO_CONTENT_CHARS);
        assert!(p.contains("Focus keywords: rust"));
    }

    #[test]
    fn length_parses_lowercase() {
        let req: BlogDraftRequest =
            serde_json::from_str(r#"{"topic":"x","length":"short"}"#).unwrap();
        assert_eq!(req.length, Some(DraftLength::Short));
    }

    #[test]
    fn validation() {
        let mut req = bare();
        assert!(req.validate().is_ok());
        req.topic = " ".into();
        assert!(matches!(
            req.validate(),
            Err(ValidationError::Empty { field: "topic" })
        ));

        let seo_req = SeoRequest {
            title: "t".into(),
            content: "".into(),
            keywords: vec![],
        };
        assert!(seo_req.validate().is_err());
    }
}
