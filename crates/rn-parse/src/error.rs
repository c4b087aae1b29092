//! Error types for rn-parse

use rn_core::CoreError;
use thiserror::Error;

/// Parse errors for the textual relation and dependency notation
#[derive(Error, Debug)]
pub enum ParseError {
    /// P001: Nothing to parse
    #[error("[P001] Input is empty")]
    EmptyInput,

    /// P002: Relation notation without an attribute list
    #[error("[P002] Missing '(' in relation '{input}'")]
    MissingOpenParen { input: String },

    /// P003: Relation notation not closed by ')'
    #[error("[P003] Relation '{input}' must end with ')'")]
    UnbalancedParens { input: String },

    /// P004: Relation notation with no name before '('
    #[error("[P004] Relation '{input}' has no name")]
    MissingRelationName { input: String },

    /// P005: Relation notation with an empty attribute list
    #[error("[P005] Relation '{name}' has an empty attribute list")]
    EmptyAttributeList { name: String },

    /// P006: Empty attribute token between commas
    #[error("[P006] Empty attribute in list '{input}'")]
    EmptyAttribute { input: String },

    /// P007: Dependency item without the '->' separator
    #[error("[P007] Missing '->' in dependency '{item}'")]
    MissingArrow { item: String },

    /// P008: Dependency item with an empty determinant side
    #[error("[P008] Dependency '{item}' has an empty determinant")]
    MissingDeterminant { item: String },

    /// P009: Dependency item with an empty dependent side
    #[error("[P009] Dependency '{item}' has an empty dependent")]
    MissingDependent { item: String },

    /// P010: Dependency references an attribute outside the relation schema
    #[error("[P010] Attribute '{attribute}' is not in relation '{relation}'")]
    UnknownAttribute { attribute: String, relation: String },

    /// P011: Parsed value failed core validation
    #[error("[P011] Invalid schema element: {0}")]
    Invalid(#[from] CoreError),
}

/// Result type alias for ParseError
pub type ParseResult<T> = Result<T, ParseError>;
