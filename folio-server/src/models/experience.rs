//! Work experience input

use chrono::NaiveDate;
use serde::Deserialize;

use super::validation::{optional, required, string_list};
use super::ValidationError;

const MAX_NAME_LEN: usize = 200;
const MAX_DESCRIPTION_LEN: usize = 5000;
const MAX_HIGHLIGHTS: usize = 20;
const MAX_HIGHLIGHT_LEN: usize = 500;

/// Experience entry as submitted by the admin UI.
///
/// Dates are `YYYY-MM-DD`; a missing `end_date` marks the current position.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceForm {
    pub company: String,
    pub role: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceInput {
    pub company: String,
    pub role: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub highlights: Vec<String>,
    pub display_order: i32,
}

impl TryFrom<ExperienceForm> for ExperienceInput {
    type Error = ValidationError;

    fn try_from(form: ExperienceForm) -> Result<Self, Self::Error> {
        if let Some(end) = form.end_date {
            if end < form.start_date {
                return Err(ValidationError::InvalidFormat {
                    field: "end_date",
                    reason: "must not be before start_date",
                });
            }
        }

        let description = form.description.trim();
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::TooLong {
                field: "description",
                max: MAX_DESCRIPTION_LEN,
            });
        }

        Ok(Self {
            company: required("company", &form.company, MAX_NAME_LEN)?,
            role: required("role", &form.role, MAX_NAME_LEN)?,
            location: optional("location", form.location.as_deref(), MAX_NAME_LEN)?,
            start_date: form.start_date,
            end_date: form.end_date,
            description: description.to_owned(),
            highlights: string_list("highlights", &form.highlights, MAX_HIGHLIGHTS, MAX_HIGHLIGHT_LEN)?,
            display_order: form.display_order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn form() -> ExperienceForm {
        ExperienceForm {
            company: "Acme".into(),
            role: "Engineer".into(),
            location: None,
            start_date: date("2021-03-01"),
            end_date: None,
            description: "Built things".into(),
            highlights: vec!["Shipped v2".into()],
            display_order: 0,
        }
    }

    #[test]
    fn current_position_has_no_end() {
        let input = ExperienceInput::try_from(form()).unwrap();
        assert!(input.end_date.is_none());
    }

    #[test]
    fn end_before_start_rejected() {
        let mut f = form();
        f.end_date = Some(date("2020-01-01"));
        assert!(matches!(
            ExperienceInput::try_from(f),
            Err(ValidationError::InvalidFormat { field: "end_date", .. })
        ));
    }

    #[test]
    fn same_day_end_allowed() {
        let mut f = form();
        f.end_date = Some(f.start_date);
        assert!(ExperienceInput::try_from(f).is_ok());
    }

    #[test]
    fn parses_iso_dates_from_json() {
        let f: ExperienceForm = serde_json::from_str(
            r#"{"company":"Acme","role":"Dev","start_date":"2022-05-01","end_date":"2023-01-31"}"#,
        )
        .unwrap();
        assert_eq!(f.end_date, Some(date("2023-01-31")));
        assert!(f.highlights.is_empty());
    }
}
