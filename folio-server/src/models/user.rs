//! Admin users and roles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{email, required};
use super::ValidationError;

/// What a user may do in the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "editor" => Ok(Self::Editor),
            other => Err(ValidationError::InvalidVariant {
                field: "role",
                value: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserForm {
    pub email: String,
    pub name: String,
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserInput {
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl TryFrom<UserForm> for UserInput {
    type Error = ValidationError;

    fn try_from(form: UserForm) -> Result<Self, Self::Error> {
        let role = match form.role.as_deref() {
            None => Role::Editor,
            Some(r) => r.parse()?,
        };

        Ok(Self {
            email: email("email", &form.email)?,
            name: required("name", &form.name, 100)?,
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parsing() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("editor".parse::<Role>().unwrap(), Role::Editor);
        assert!(matches!(
            "owner".parse::<Role>(),
            Err(ValidationError::InvalidVariant { field: "role", .. })
        ));
    }

    #[test]
    fn role_defaults_to_editor() {
        let input = UserInput::try_from(UserForm {
            email: "ed@example.com".into(),
            name: "Ed".into(),
            role: None,
        })
        .unwrap();
        assert_eq!(input.role, Role::Editor);
    }
}
