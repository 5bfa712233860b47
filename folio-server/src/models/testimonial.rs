//! Testimonial input

use serde::Deserialize;

use super::validation::{optional, optional_url, required};
use super::ValidationError;

const MAX_QUOTE_LEN: usize = 2000;

#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialForm {
    pub author_name: String,
    pub author_title: Option<String>,
    pub company: Option<String>,
    pub quote: String,
    pub avatar_url: Option<String>,
    /// Star rating, 1..=5
    pub rating: Option<i64>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialInput {
    pub author_name: String,
    pub author_title: Option<String>,
    pub company: Option<String>,
    pub quote: String,
    pub avatar_url: Option<String>,
    pub rating: Option<i16>,
    pub featured: bool,
    pub display_order: i32,
}

fn rating(value: Option<i64>) -> Result<Option<i16>, ValidationError> {
    match value {
        None => Ok(None),
        Some(r @ 1..=5) => Ok(Some(r as i16)),
        Some(_) => Err(ValidationError::OutOfRange {
            field: "rating",
            min: 1,
            max: 5,
        }),
    }
}

impl TryFrom<TestimonialForm> for TestimonialInput {
    type Error = ValidationError;

    fn try_from(form: TestimonialForm) -> Result<Self, Self::Error> {
        Ok(Self {
            author_name: required("author_name", &form.author_name, 100)?,
            author_title: optional("author_title", form.author_title.as_deref(), 200)?,
            company: optional("company", form.company.as_deref(), 200)?,
            quote: required("quote", &form.quote, MAX_QUOTE_LEN)?,
            avatar_url: optional_url("avatar_url", form.avatar_url.as_deref())?,
            rating: rating(form.rating)?,
            featured: form.featured,
            display_order: form.display_order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> TestimonialForm {
        TestimonialForm {
            author_name: "Grace".into(),
            author_title: Some(" ".into()),
            company: None,
            quote: " Shipped on time. ".into(),
            avatar_url: None,
            rating: Some(5),
            featured: true,
            display_order: 0,
        }
    }

    #[test]
    fn trims_and_blanks_become_none() {
        let input = TestimonialInput::try_from(form()).unwrap();
        assert_eq!(input.quote, "Shipped on time.");
        assert_eq!(input.author_title, None);
        assert_eq!(input.rating, Some(5));
    }

    #[test]
    fn rating_bounds() {
        let mut f = form();
        f.rating = Some(0);
        assert!(matches!(
            TestimonialInput::try_from(f),
            Err(ValidationError::OutOfRange { field: "rating", .. })
        ));

        let mut f = form();
        f.rating = None;
        assert_eq!(TestimonialInput::try_from(f).unwrap().rating, None);
    }
}
