// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Null padding
//!
//! Columns the stored dataset lacks are materialized as nullable fields
//! filled with NULL values, typed from the expected schema.

use crate::error::{Error, Result};
use crate::types::ColumnType;
use arrow::array::{ArrayRef, new_null_array};
use arrow_schema::{Field, FieldRef};
use std::sync::Arc;

/// Creates an all-null array of `column_type` with `rows` entries
pub fn null_column(name: &str, column_type: &ColumnType, rows: usize) -> Result<ArrayRef> {
    let data_type = column_type
        .to_arrow()
        .ok_or_else(|| Error::UnsupportedType {
            column: name.to_string(),
            type_name: column_type.to_string(),
        })?;
    Ok(new_null_array(&data_type, rows))
}

/// Creates the nullable field and all-null array for a padded column
pub fn null_padded(name: &str, column_type: &ColumnType, rows: usize) -> Result<(FieldRef, ArrayRef)> {
    let array = null_column(name, column_type, rows)?;
    let field = Arc::new(Field::new(name, array.data_type().clone(), true));
    Ok((field, array))
}
