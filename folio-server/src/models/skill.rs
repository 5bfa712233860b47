//! Skill input and proficiency bounds

use serde::Deserialize;

use super::validation::{optional, required};
use super::ValidationError;

const MAX_NAME_LEN: usize = 100;
const MAX_CATEGORY_LEN: usize = 50;
const MAX_ICON_LEN: usize = 200;

/// Skill proficiency as a percentage (0..=100)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proficiency(i16);

impl Proficiency {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 100;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "proficiency",
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value as i16))
    }

    pub fn value(self) -> i16 {
        self.0
    }
}

/// Skill as submitted by the admin UI
#[derive(Debug, Clone, Deserialize)]
pub struct SkillForm {
    pub name: String,
    pub category: String,
    pub proficiency: i64,
    pub icon: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

/// Validated skill, ready for the repository
#[derive(Debug, Clone, PartialEq)]
pub struct SkillInput {
    pub name: String,
    pub category: String,
    pub proficiency: Proficiency,
    pub icon: Option<String>,
    pub display_order: i32,
}

impl TryFrom<SkillForm> for SkillInput {
    type Error = ValidationError;

    fn try_from(form: SkillForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required("name", &form.name, MAX_NAME_LEN)?,
            category: required("category", &form.category, MAX_CATEGORY_LEN)?,
            proficiency: Proficiency::new(form.proficiency)?,
            icon: optional("icon", form.icon.as_deref(), MAX_ICON_LEN)?,
            display_order: form.display_order,
        })
    }
}
