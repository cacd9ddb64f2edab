//! The create-link form.

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::entities::NewLinkRequest;

pub const URL_REQUIRED: &str = "Please enter the URL";

/// Inputs of the create form.
///
/// Deserialized straight from the web form; `custom_code` is optional and a
/// blank value means "let the backend generate one".
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct FormState {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Please enter the URL"))]
    pub url: String,

    #[serde(default)]
    pub custom_code: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

impl FormState {
    pub fn new(url: impl Into<String>, custom_code: Option<String>) -> Self {
        Self {
            url: url.into(),
            custom_code,
        }
    }

    /// Builds the create payload. Blank custom codes are dropped.
    pub fn to_request(&self) -> NewLinkRequest {
        NewLinkRequest {
            url: self.url.trim().to_string(),
            custom_code: self
                .custom_code
                .as_deref()
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_string),
        }
    }

    pub fn clear(&mut self) {
        self.url.clear();
        self.custom_code = None;
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_empty() && self.custom_code.as_deref().is_none_or(str::is_empty)
    }
}

/// First user-facing message in `errors`.
pub(crate) fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| URL_REQUIRED.to_string())
}
