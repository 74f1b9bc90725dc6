// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Schema reconciliation
//!
//! Reads a stored dataset whose schema may lag behind what the caller
//! expects and returns a batch shaped exactly like the expected schema.
//! Columns the dataset lacks become typed all-null columns. Columns present
//! on both sides must agree on type; there is no implicit coercion. A stored
//! column with Arrow type `Null` carries no values and is padded under the
//! expected type instead.

use crate::dataset::DatasetHandle;
use crate::error::{Error, Result};
use crate::null_padding::null_padded;
use crate::schema::Schema;
use crate::types::ColumnType;
use arrow_array::{ArrayRef, RecordBatch, RecordBatchOptions};
use arrow_schema::{FieldRef, Schema as ArrowSchema};
use diagnostics::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What to do with stored columns the expected schema does not name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraColumnPolicy {
    /// Leave them out of the output
    #[default]
    Drop,
    /// Fail with `UnexpectedColumn`
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileOptions {
    pub extra_columns: ExtraColumnPolicy,
}

/// A column declared on both sides with different types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeConflict {
    pub column: String,
    pub actual: ColumnType,
    pub expected: ColumnType,
}

/// Metadata-only comparison of a stored schema against an expected one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilePlan {
    present: Vec<String>,
    untyped: Vec<String>,
    missing: Vec<String>,
    extra: Vec<String>,
    conflicts: Vec<TypeConflict>,
    same_order: bool,
}

impl ReconcilePlan {
    /// Compare `actual` against `expected`. Never fails; see [`Self::check`].
    #[must_use]
    pub fn compute(actual: &Schema, expected: &Schema) -> Self {
        let mut present = Vec::new();
        let mut untyped = Vec::new();
        let mut missing = Vec::new();
        let mut conflicts = Vec::new();

        for col in expected.columns() {
            match actual.get(&col.name) {
                Some(ColumnType::Null) => untyped.push(col.name.clone()),
                Some(actual_type) => {
                    if !actual_type.fits(&col.column_type) {
                        conflicts.push(TypeConflict {
                            column: col.name.clone(),
                            actual: actual_type.clone(),
                            expected: col.column_type.clone(),
                        });
                    }
                    present.push(col.name.clone());
                }
                None => missing.push(col.name.clone()),
            }
        }

        let extra: Vec<String> = actual
            .columns()
            .iter()
            .filter(|col| !expected.contains(&col.name))
            .map(|col| col.name.clone())
            .collect();

        let same_order = actual.names() == expected.names();

        Self {
            present,
            untyped,
            missing,
            extra,
            conflicts,
            same_order,
        }
    }

    /// Columns in both schemas, in expected order
    #[must_use]
    pub fn present(&self) -> &[String] {
        &self.present
    }

    /// Stored columns with no values, padded under the expected type
    #[must_use]
    pub fn untyped(&self) -> &[String] {
        &self.untyped
    }

    /// Columns only in the expected schema, in expected order
    #[must_use]
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// Columns only in the stored schema, in stored order
    #[must_use]
    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    #[must_use]
    pub fn conflicts(&self) -> &[TypeConflict] {
        &self.conflicts
    }

    /// True when the stored data already has the expected shape
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.same_order && self.conflicts.is_empty() && self.untyped.is_empty()
    }

    /// Turn the plan into an error if it cannot be executed under `options`.
    ///
    /// Checked in order: type conflicts, unexpected extras, then padded
    /// (missing or untyped) columns whose type cannot be synthesized.
    pub fn check(&self, expected: &Schema, options: &ReconcileOptions) -> Result<()> {
        if let Some(conflict) = self.conflicts.first() {
            return Err(Error::SchemaConflict {
                column: conflict.column.clone(),
                actual: conflict.actual.clone(),
                expected: conflict.expected.clone(),
            });
        }

        if options.extra_columns == ExtraColumnPolicy::Reject
            && let Some(extra) = self.extra.first()
        {
            return Err(Error::UnexpectedColumn(extra.clone()));
        }

        for name in self.missing.iter().chain(&self.untyped) {
            if let Some(column_type) = expected.get(name)
                && !column_type.is_recognized()
            {
                return Err(Error::UnsupportedType {
                    column: name.clone(),
                    type_name: column_type.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Stateless reconciler; holds only its options
#[derive(Debug, Clone, Default)]
pub struct SchemaReconciler {
    options: ReconcileOptions,
}

impl SchemaReconciler {
    #[must_use]
    pub fn new(options: ReconcileOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &ReconcileOptions {
        &self.options
    }

    /// Compute and validate a plan without reading any data
    pub fn plan(&self, actual: &Schema, expected: &Schema) -> Result<ReconcilePlan> {
        let plan = ReconcilePlan::compute(actual, expected);
        plan.check(expected, &self.options)?;
        Ok(plan)
    }

    /// Produce a batch whose columns are exactly `expected`, in its order
    pub fn reconcile<D: DatasetHandle + ?Sized>(
        &self,
        actual: &Schema,
        expected: &Schema,
        dataset: &D,
    ) -> Result<RecordBatch> {
        let plan = self.plan(actual, expected)?;

        for name in plan.extra() {
            debug!("Dropping stored column {name} not in expected schema", name: name.as_str());
        }

        let fetched = dataset.read_columns(plan.present())?;
        let rows = fetched.num_rows();
        let fetched_schema = fetched.schema();

        let mut fields: Vec<FieldRef> = Vec::with_capacity(expected.len());
        let mut arrays: Vec<ArrayRef> = Vec::with_capacity(expected.len());

        for col in expected.columns() {
            if plan.present().contains(&col.name) {
                let idx = fetched_schema.index_of(&col.name).map_err(|_| {
                    Error::source_unavailable(format!("dataset did not return column '{}'", col.name))
                })?;
                let field = fetched_schema.fields()[idx].clone();

                // The handle's data must agree with the schema it reported.
                let fetched_type = ColumnType::from_arrow(field.data_type());
                if !fetched_type.fits(&col.column_type) {
                    return Err(Error::SchemaConflict {
                        column: col.name.clone(),
                        actual: fetched_type,
                        expected: col.column_type.clone(),
                    });
                }

                if fetched_type == ColumnType::Null && col.column_type != ColumnType::Null {
                    let (field, array) = null_padded(&col.name, &col.column_type, rows)?;
                    fields.push(field);
                    arrays.push(array);
                } else {
                    fields.push(field);
                    arrays.push(fetched.column(idx).clone());
                }
            } else {
                debug!(
                    "Padding column {name} as {column_type}",
                    name: col.name.as_str(),
                    column_type: col.column_type.to_string()
                );
                let (field, array) = null_padded(&col.name, &col.column_type, rows)?;
                fields.push(field);
                arrays.push(array);
            }
        }

        info!(
            "Reconciled {rows} rows: {read} read, {padded} padded, {dropped} dropped",
            rows: rows,
            read: plan.present().len(),
            padded: plan.missing().len() + plan.untyped().len(),
            dropped: plan.extra().len()
        );

        Ok(RecordBatch::try_new_with_options(
            Arc::new(ArrowSchema::new(fields)),
            arrays,
            &RecordBatchOptions::new().with_row_count(Some(rows)),
        )?)
    }

    /// Read the stored schema from `dataset`, then reconcile against `expected`
    pub fn reconcile_dataset<D: DatasetHandle + ?Sized>(
        &self,
        dataset: &D,
        expected: &Schema,
    ) -> Result<RecordBatch> {
        let actual = dataset.read_schema()?;
        self.reconcile(&actual, expected, dataset)
    }
}

/// Reconcile with default options (extra columns dropped)
pub fn reconcile<D: DatasetHandle + ?Sized>(
    actual: &Schema,
    expected: &Schema,
    dataset: &D,
) -> Result<RecordBatch> {
    SchemaReconciler::default().reconcile(actual, expected, dataset)
}

/// Names in `expected` that `actual` lacks, in expected order
#[must_use]
pub fn missing_columns(actual: &Schema, expected: &Schema) -> Vec<String> {
    expected
        .columns()
        .iter()
        .filter(|col| !actual.contains(&col.name))
        .map(|col| col.name.clone())
        .collect()
}
