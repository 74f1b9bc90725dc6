// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Expected-schema configuration
//!
//! ```yaml
//! columns:
//!   - name: user_id
//!     type: integer
//!   - name: signup_date
//!     type: date
//! extra_columns: drop
//! ```

use crate::error::{Error, Result};
use crate::reconciler::{ExtraColumnPolicy, ReconcileOptions};
use crate::schema::{Column, Schema};
use crate::types::ColumnType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One expected column
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

/// Configuration for a reconcile run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectedSchemaConfig {
    /// Expected columns in output order
    pub columns: Vec<ColumnConfig>,

    #[serde(default)]
    pub extra_columns: ExtraColumnPolicy,
}

impl ExpectedSchemaConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(text).map_err(Error::config)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("read {}: {}", path.display(), e)))?;
        Self::from_yaml_str(&text)
    }

    /// Validate configuration - names must be non-empty and unique
    ///
    /// # Errors
    /// Returns `Config` for a blank name, `DuplicateColumn` for a repeat
    pub fn validate(&self) -> Result<()> {
        if let Some(blank) = self.columns.iter().position(|c| c.name.trim().is_empty()) {
            return Err(Error::config(format!("column {} has an empty name", blank + 1)));
        }
        let _ = self.schema()?;
        Ok(())
    }

    pub fn schema(&self) -> Result<Schema> {
        Schema::new(
            self.columns
                .iter()
                .map(|c| Column::new(c.name.clone(), c.column_type.clone()))
                .collect(),
        )
    }

    #[must_use]
    pub fn options(&self) -> ReconcileOptions {
        ReconcileOptions {
            extra_columns: self.extra_columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_aliases() -> Result<()> {
        let config = ExpectedSchemaConfig::from_yaml_str(
            r#"
columns:
  - name: user_id
    type: integer
  - name: username
    type: string
  - name: signup_date
    type: date
"#,
        )?;
        let schema = config.schema()?;
        assert_eq!(schema.names(), vec!["user_id", "username", "signup_date"]);
        assert_eq!(schema.get("user_id"), Some(&ColumnType::Int64));
        assert_eq!(schema.get("signup_date"), Some(&ColumnType::Date));
        assert_eq!(config.options().extra_columns, ExtraColumnPolicy::Drop);
        Ok(())
    }

    #[test]
    fn test_reject_policy() -> Result<()> {
        let config = ExpectedSchemaConfig::from_yaml_str(
            "columns:\n  - name: a\n    type: bool\nextra_columns: reject\n",
        )?;
        assert_eq!(config.options().extra_columns, ExtraColumnPolicy::Reject);
        Ok(())
    }

    #[test]
    fn test_duplicate_names() {
        let err = ExpectedSchemaConfig::from_yaml_str(
            "columns:\n  - name: a\n    type: bool\n  - name: a\n    type: int\n",
        )
        .expect_err("duplicate");
        assert!(matches!(err, Error::DuplicateColumn(_)));
    }

    #[test]
    fn test_unknown_field_and_blank_name() {
        let err = ExpectedSchemaConfig::from_yaml_str(
            "columns:\n  - name: a\n    type: bool\n    nullable: true\n",
        )
        .expect_err("unknown field");
        assert!(matches!(err, Error::Config(_)));

        let err = ExpectedSchemaConfig::from_yaml_str("columns:\n  - name: ' '\n    type: bool\n")
            .expect_err("blank name");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unknown_type_parses() -> Result<()> {
        let config = ExpectedSchemaConfig::from_yaml_str(
            "columns:\n  - name: amount\n    type: decimal\n",
        )?;
        assert_eq!(
            config.schema()?.get("amount"),
            Some(&ColumnType::Unrecognized("decimal".to_string()))
        );
        Ok(())
    }
}
