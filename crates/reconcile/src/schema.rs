// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Ordered column-name-to-type schemas

use crate::error::{Error, Result};
use crate::types::ColumnType;
use arrow_schema::Schema as ArrowSchema;
use std::collections::HashMap;
use std::fmt;

/// A named, typed column declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
}

impl Column {
    pub fn new<S: Into<String>>(name: S, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// Ordered mapping from unique column name to declared type.
///
/// Order only matters for output presentation; lookups are by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    columns: Vec<Column>,
    by_name: HashMap<String, usize>,
}

impl Schema {
    /// Build a schema, rejecting repeated names
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(columns.len());
        for (idx, col) in columns.iter().enumerate() {
            if by_name.insert(col.name.clone(), idx).is_some() {
                return Err(Error::DuplicateColumn(col.name.clone()));
            }
        }
        Ok(Self { columns, by_name })
    }

    /// Build a schema from `(name, type)` pairs
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, ColumnType)>,
        S: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(name, ty)| Column::new(name, ty))
                .collect(),
        )
    }

    /// Derive a schema from Arrow metadata
    pub fn from_arrow(schema: &ArrowSchema) -> Result<Self> {
        Self::new(
            schema
                .fields()
                .iter()
                .map(|field| Column::new(field.name(), ColumnType::from_arrow(field.data_type())))
                .collect(),
        )
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColumnType> {
        self.by_name
            .get(name)
            .map(|&idx| &self.columns[idx].column_type)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, col) in self.columns.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", col.name, col.column_type)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow_schema::{DataType, Field};

    #[test]
    fn test_duplicate_rejected() {
        let err = Schema::from_pairs([("a", ColumnType::Int64), ("a", ColumnType::String)])
            .expect_err("duplicate names");
        assert!(matches!(err, Error::DuplicateColumn(name) if name == "a"));
    }

    #[test]
    fn test_lookup_and_order() -> Result<()> {
        let schema = Schema::from_pairs([
            ("user_id", ColumnType::Int64),
            ("username", ColumnType::String),
        ])?;
        assert_eq!(schema.names(), vec!["user_id", "username"]);
        assert_eq!(schema.get("username"), Some(&ColumnType::String));
        assert_eq!(schema.get("missing"), None);
        assert_eq!(schema.to_string(), "{user_id: int64, username: string}");
        Ok(())
    }

    #[test]
    fn test_from_arrow() -> Result<()> {
        let arrow = ArrowSchema::new(vec![
            Field::new("id", DataType::Int32, false),
            Field::new("tags", DataType::new_list(DataType::Utf8, true), true),
        ]);
        let schema = Schema::from_arrow(&arrow)?;
        assert_eq!(schema.get("id"), Some(&ColumnType::Int32));
        assert!(schema.get("tags").is_some_and(|t| !t.is_recognized()));
        Ok(())
    }
}
