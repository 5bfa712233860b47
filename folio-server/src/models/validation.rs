//! Validation errors and the field checks shared by every model

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Url;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Numeric field outside its allowed range
    OutOfRange { field: &'static str, min: i64, max: i64 },

    /// String doesn't match required format (e.g., slug, email)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Invalid enum variant
    InvalidVariant { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::OutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::InvalidVariant { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Loose email shape check; deliverability is not our concern.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex")
});

/// Trimmed, non-empty, at most `max` characters.
pub fn required(field: &'static str, value: &str, max: usize) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(trimmed.to_owned())
}

/// Like [`required`] but blank input becomes `None`.
pub fn optional(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => required(field, v, max).map(Some),
    }
}

/// Absolute http(s) URL.
pub fn url(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = required(field, value, 2048)?;
    let parsed = Url::parse(&trimmed).map_err(|_| ValidationError::InvalidFormat {
        field,
        reason: "must be an absolute URL",
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed),
        _ => Err(ValidationError::InvalidFormat {
            field,
            reason: "must use http or https",
        }),
    }
}

pub fn optional_url(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<String>, ValidationError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => url(field, v).map(Some),
    }
}

/// Email address, normalized to lowercase.
pub fn email(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = required(field, value, 254)?;
    if !EMAIL_RE.is_match(&trimmed) {
        return Err(ValidationError::InvalidFormat {
            field,
            reason: "must be a valid email address",
        });
    }
    Ok(trimmed.to_lowercase())
}

/// A bounded list of short strings (tags, tech stack, highlights).
///
/// Blank entries are dropped, duplicates removed preserving order.
pub fn string_list(
    field: &'static str,
    values: &[String],
    max_items: usize,
    max_len: usize,
) -> Result<Vec<String>, ValidationError> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for v in values {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.chars().count() > max_len {
            return Err(ValidationError::TooLong {
                field,
                max: max_len,
            });
        }
        if !out.iter().any(|existing| existing == trimmed) {
            out.push(trimmed.to_owned());
        }
    }

    if out.len() > max_items {
        return Err(ValidationError::OutOfRange {
            field,
            min: 0,
            max: max_items as i64,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "title",
            max: 200,
        };
        assert_eq!(
            err.to_string(),
            "title exceeds maximum length of 200 characters"
        );

        let err = ValidationError::OutOfRange {
            field: "proficiency",
            min: 0,
            max: 100,
        };
        assert_eq!(err.to_string(), "proficiency must be between 0 and 100");
    }

    #[test]
    fn required_trims_and_bounds() {
        assert_eq!(required("name", "  Rust ", 10).unwrap(), "Rust");
        assert!(matches!(
            required("name", "   ", 10),
            Err(ValidationError::Empty { field: "name" })
        ));
        assert!(matches!(
            required("name", "abcdef", 5),
            Err(ValidationError::TooLong { max: 5, .. })
        ));
    }

    #[test]
    fn required_counts_chars_not_bytes() {
        // 5 chars, 10 bytes
        assert!(required("name", "ééééé", 5).is_ok());
    }

    #[test]
    fn optional_blank_is_none() {
        assert_eq!(optional("bio", Some("  "), 10).unwrap(), None);
        assert_eq!(optional("bio", None, 10).unwrap(), None);
        assert_eq!(optional("bio", Some(" hi "), 10).unwrap().as_deref(), Some("hi"));
    }

    #[test]
    fn url_requires_http_scheme() {
        assert!(url("url", "https://example.com/x").is_ok());
        assert!(url("url", "http://localhost:3000").is_ok());
        assert!(matches!(
            url("url", "ftp://example.com"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            url("url", "example.com"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn email_shape() {
        assert_eq!(email("email", " Ada@Example.COM ").unwrap(), "ada@example.com");
        assert!(email("email", "not-an-email").is_err());
        assert!(email("email", "a@b").is_err());
        assert!(email("email", "a b@c.de").is_err());
    }

    #[test]
    fn string_list_dedupes_and_limits() {
        let tags = vec![
            "rust".to_string(),
            " ".to_string(),
            "axum".to_string(),
            "rust".to_string(),
        ];
        assert_eq!(string_list("tags", &tags, 5, 20).unwrap(), vec!["rust", "axum"]);

        let many: Vec<String> = (0..4).map(|i| format!("t{i}")).collect();
        assert!(matches!(
            string_list("tags", &many, 3, 20),
            Err(ValidationError::OutOfRange { max: 3, .. })
        ));
    }
}
