use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ValidationErrorDto;

/// Field level validation failure.
///
/// Collects one or more messages per field. Produced either from `validator`
/// derive rules on request DTOs or by services for rules that need the database
/// (existing category, unique email, ...).
#[derive(Error, Debug, Clone, PartialEq, Default)]
#[error("Validation failed: {fields:?}")]
pub struct ValidationError {
    pub fields: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    /// Creates a validation error for a single field.
    pub fn field(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::default().with_field(name, message)
    }

    /// Adds a message for a field, keeping any earlier messages for it.
    pub fn with_field(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.fields
            .entry(name.into())
            .or_default()
            .push(message.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `Err(self)` when at least one field failed.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut result = ValidationError::default();

        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                result = result.with_field(field.to_string(), message);
            }
        }

        result
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorDto {
                error: "Les données fournies sont invalides.".to_string(),
                fields: self.fields,
            }),
        )
            .into_response()
    }
}
