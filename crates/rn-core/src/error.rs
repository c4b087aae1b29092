//! Error types for rn-core

use thiserror::Error;

/// Core error type for Relnorm
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Relation constructed with no attributes
    #[error("[E001] Relation '{name}' has no attributes")]
    EmptyRelation { name: String },

    /// E002: Relation constructed with an empty name
    #[error("[E002] Relation name must not be empty")]
    EmptyRelationName,

    /// E003: Functional dependency with an empty determinant
    #[error("[E003] Functional dependency has an empty determinant")]
    EmptyDeterminant,

    /// E004: Functional dependency with an empty dependent
    #[error("[E004] Functional dependency has an empty dependent")]
    EmptyDependent,
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
