//! Application error taxonomy.
//!
//! Almost everything here is user-facing validation, not a system fault:
//! `Validation` carries the exact inline message the form shows, and
//! `InvalidCredentials` is the stub login rejection. `NotFound` covers
//! catalog/collection lookup misses; the remaining variants are internal
//! state errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Form validation rejection. Displays the inline message verbatim.
    #[error("{message}")]
    Validation { message: String },

    #[error("Credenciales inválidas")]
    InvalidCredentials,

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("No authenticated user")]
    NotAuthenticated,

    #[error("Internal lock error")]
    LockPoisoned,

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}
