// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::types::ColumnType;

/// Reconcile error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dataset could not produce its schema or the requested columns
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// A column present in both schemas has different declared types
    #[error("Schema conflict on column '{column}': stored as {actual}, expected {expected}")]
    SchemaConflict {
        column: String,
        actual: ColumnType,
        expected: ColumnType,
    },

    /// A null column cannot be synthesized for this type
    #[error("Unsupported type '{type_name}' for missing column '{column}'")]
    UnsupportedType { column: String, type_name: String },

    /// Stored dataset has a column the expected schema does not name
    #[error("Unexpected column '{0}' in stored dataset")]
    UnexpectedColumn(String),

    /// Schema construction with a repeated column name
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Expected-schema configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output file could not be written
    #[error("Write error: {0}")]
    Write(String),

    /// Arrow error while assembling a batch
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow_schema::ArrowError),
}

impl Error {
    pub fn source_unavailable<S: std::fmt::Display>(what: S) -> Self {
        Error::SourceUnavailable(what.to_string())
    }

    pub fn config<S: std::fmt::Display>(what: S) -> Self {
        Error::Config(what.to_string())
    }

    pub fn write<S: std::fmt::Display>(what: S) -> Self {
        Error::Write(what.to_string())
    }
}

/// Result type for reconcile operations
pub type Result<T> = std::result::Result<T, Error>;
