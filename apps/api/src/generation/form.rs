//! Resume form input and its validation.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The nine fields collected from the applicant. Only `name` is required.
///
/// Missing JSON fields deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    /// Comma separated.
    pub skills: String,
    pub experience: String,
    pub projects: String,
    pub education: String,
}

impl FormInput {
    /// Rejects the form before any pipeline work runs.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        Ok(())
    }
}
