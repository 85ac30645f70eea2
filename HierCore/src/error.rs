//! Error types for `HierCore`

use thiserror::Error;

/// The error type for `HierCore` operations.
///
/// Column mapping and tree building never fail; missing metadata and broken
/// parent links degrade to defaults. Errors only come from loading inputs.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A relationship path was not of the form `Relationship.Field`.
    #[error("invalid relationship path '{path}': expected <relationship>.<field>")]
    InvalidRelationshipPath {
        /// The offending path.
        path: String,
    },

    /// Input had the wrong shape (e.g. a record that is not a JSON object).
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

/// A specialized Result type for `HierCore` operations.
pub type Result<T> = std::result::Result<T, Error>;
