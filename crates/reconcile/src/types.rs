// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Declared column types
//!
//! A closed set of types that reconciliation compares by equality. Arrow
//! types outside the set are carried as [`ColumnType::Unrecognized`] so a
//! stored dataset with exotic columns can still be described and reconciled
//! as long as those columns are not needed.

use arrow_schema::{DataType, TimeUnit};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    Boolean,
    Int32,
    Int64,
    Float32,
    Float64,
    String,
    Binary,
    Date,
    Timestamp(TimeUnit),
    /// A stored column with no values; compatible with any expected type
    Null,
    /// A type name outside the closed set
    Unrecognized(String),
}

impl ColumnType {
    /// Parse a user-facing type name. Unknown names become `Unrecognized`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "bool" | "boolean" => ColumnType::Boolean,
            "int32" | "i32" => ColumnType::Int32,
            "int" | "integer" | "int64" | "i64" | "long" => ColumnType::Int64,
            "float32" | "f32" => ColumnType::Float32,
            "float" | "double" | "float64" | "f64" => ColumnType::Float64,
            "str" | "string" | "utf8" | "text" => ColumnType::String,
            "binary" | "bytes" => ColumnType::Binary,
            "date" | "date32" => ColumnType::Date,
            "timestamp" | "timestamp_us" => ColumnType::Timestamp(TimeUnit::Microsecond),
            "timestamp_s" => ColumnType::Timestamp(TimeUnit::Second),
            "timestamp_ms" => ColumnType::Timestamp(TimeUnit::Millisecond),
            "timestamp_ns" => ColumnType::Timestamp(TimeUnit::Nanosecond),
            "null" => ColumnType::Null,
            _ => ColumnType::Unrecognized(name.trim().to_string()),
        }
    }

    /// Map an Arrow type onto the closed set
    #[must_use]
    pub fn from_arrow(data_type: &DataType) -> Self {
        match data_type {
            DataType::Boolean => ColumnType::Boolean,
            DataType::Int32 => ColumnType::Int32,
            DataType::Int64 => ColumnType::Int64,
            DataType::Float32 => ColumnType::Float32,
            DataType::Float64 => ColumnType::Float64,
            DataType::Utf8 | DataType::LargeUtf8 => ColumnType::String,
            DataType::Binary | DataType::LargeBinary => ColumnType::Binary,
            DataType::Date32 => ColumnType::Date,
            DataType::Timestamp(unit, _) => ColumnType::Timestamp(*unit),
            DataType::Null => ColumnType::Null,
            other => ColumnType::Unrecognized(other.to_string()),
        }
    }

    /// Arrow type used when a column of this type is synthesized.
    ///
    /// Returns `None` for `Unrecognized`, which has no Arrow counterpart.
    #[must_use]
    pub fn to_arrow(&self) -> Option<DataType> {
        let data_type = match self {
            ColumnType::Boolean => DataType::Boolean,
            ColumnType::Int32 => DataType::Int32,
            ColumnType::Int64 => DataType::Int64,
            ColumnType::Float32 => DataType::Float32,
            ColumnType::Float64 => DataType::Float64,
            ColumnType::String => DataType::Utf8,
            ColumnType::Binary => DataType::Binary,
            ColumnType::Date => DataType::Date32,
            ColumnType::Timestamp(unit) => DataType::Timestamp(*unit, None),
            ColumnType::Null => DataType::Null,
            ColumnType::Unrecognized(_) => return None,
        };
        Some(data_type)
    }

    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, ColumnType::Unrecognized(_))
    }

    /// Whether data stored as `self` can be read under `expected`.
    ///
    /// Types must match exactly, except that an all-null stored column
    /// fits any expected type.
    #[must_use]
    pub fn fits(&self, expected: &ColumnType) -> bool {
        *self == ColumnType::Null || self == expected
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Boolean => "boolean",
            ColumnType::Int32 => "int32",
            ColumnType::Int64 => "int64",
            ColumnType::Float32 => "float32",
            ColumnType::Float64 => "float64",
            ColumnType::String => "string",
            ColumnType::Binary => "binary",
            ColumnType::Date => "date",
            ColumnType::Timestamp(TimeUnit::Second) => "timestamp_s",
            ColumnType::Timestamp(TimeUnit::Millisecond) => "timestamp_ms",
            ColumnType::Timestamp(TimeUnit::Microsecond) => "timestamp_us",
            ColumnType::Timestamp(TimeUnit::Nanosecond) => "timestamp_ns",
            ColumnType::Null => "null",
            ColumnType::Unrecognized(name) => name,
        };
        f.write_str(name)
    }
}

impl From<String> for ColumnType {
    fn from(name: String) -> Self {
        ColumnType::from_name(&name)
    }
}

impl From<ColumnType> for String {
    fn from(column_type: ColumnType) -> Self {
        column_type.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(ColumnType::from_name("integer"), ColumnType::Int64);
        assert_eq!(ColumnType::from_name("INT"), ColumnType::Int64);
        assert_eq!(ColumnType::from_name("double"), ColumnType::Float64);
        assert_eq!(ColumnType::from_name("Utf8"), ColumnType::String);
        assert_eq!(ColumnType::from_name("date"), ColumnType::Date);
        assert_eq!(
            ColumnType::from_name("timestamp"),
            ColumnType::Timestamp(TimeUnit::Microsecond)
        );
        assert_eq!(
            ColumnType::from_name("decimal(10,2)"),
            ColumnType::Unrecognized("decimal(10,2)".to_string())
        );
    }

    #[test]
    fn test_display_parses_back() {
        for ty in [
            ColumnType::Boolean,
            ColumnType::Int32,
            ColumnType::Float32,
            ColumnType::Binary,
            ColumnType::Null,
            ColumnType::Timestamp(TimeUnit::Nanosecond),
        ] {
            assert_eq!(ColumnType::from_name(&ty.to_string()), ty);
        }
    }

    #[test]
    fn test_arrow_mapping() {
        assert_eq!(ColumnType::from_arrow(&DataType::LargeUtf8), ColumnType::String);
        assert_eq!(
            ColumnType::from_arrow(&DataType::Timestamp(TimeUnit::Millisecond, Some("UTC".into()))),
            ColumnType::Timestamp(TimeUnit::Millisecond)
        );
        assert!(!ColumnType::from_arrow(&DataType::Int16).is_recognized());
        assert_eq!(ColumnType::Date.to_arrow(), Some(DataType::Date32));
        assert_eq!(ColumnType::Unrecognized("x".into()).to_arrow(), None);
    }

    #[test]
    fn test_null_fits_everything() {
        assert_eq!(ColumnType::from_arrow(&DataType::Null), ColumnType::Null);
        assert!(ColumnType::Null.fits(&ColumnType::Date));
        assert!(ColumnType::Null.fits(&ColumnType::Unrecognized("decimal".into())));
        assert!(ColumnType::String.fits(&ColumnType::String));
        assert!(!ColumnType::String.fits(&ColumnType::Null));
        assert!(!ColumnType::Int32.fits(&ColumnType::Int64));
    }

    #[test]
    fn test_int_widths_are_distinct() {
        // No implicit widening: int32 and int64 never compare equal.
        assert_ne!(
            ColumnType::from_arrow(&DataType::Int32),
            ColumnType::from_arrow(&DataType::Int64)
        );
    }
}
