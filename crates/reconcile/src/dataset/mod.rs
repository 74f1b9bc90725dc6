// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Dataset handles
//!
//! A dataset handle is the only way reconciliation touches stored data:
//! - `read_schema` reports the stored column names and types
//! - `read_columns` returns just the named columns, in the requested order
//!
//! Storage layout, encoding and compression belong to the backing format.

mod csv;
mod memory;
mod parquet;

pub use csv::CsvDataset;
pub use memory::MemoryDataset;
pub use parquet::ParquetDataset;

use crate::error::{Error, Result};
use crate::schema::Schema;
use arrow_array::{RecordBatch, RecordBatchOptions};
use arrow_schema::Schema as ArrowSchema;
use std::sync::Arc;

/// Read access to a persisted table
pub trait DatasetHandle {
    /// Read the stored schema from the dataset's metadata
    fn read_schema(&self) -> Result<Schema>;

    /// Read the named columns as a single batch, columns in `names` order.
    ///
    /// An empty `names` still reports the dataset's row count through a
    /// zero-column batch.
    fn read_columns(&self, names: &[String]) -> Result<RecordBatch>;
}

impl<T: DatasetHandle + ?Sized> DatasetHandle for &T {
    fn read_schema(&self) -> Result<Schema> {
        (**self).read_schema()
    }

    fn read_columns(&self, names: &[String]) -> Result<RecordBatch> {
        (**self).read_columns(names)
    }
}

/// Project `batch` onto `names`, in that order
pub(crate) fn select_columns(batch: &RecordBatch, names: &[String]) -> Result<RecordBatch> {
    let schema = batch.schema();
    let indices = names
        .iter()
        .map(|name| {
            schema
                .index_of(name)
                .map_err(|_| Error::source_unavailable(format!("column '{name}' not in dataset")))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(batch.project(&indices)?)
}

/// A zero-column batch that still carries a row count
pub(crate) fn rows_only(rows: usize) -> Result<RecordBatch> {
    Ok(RecordBatch::try_new_with_options(
        Arc::new(ArrowSchema::empty()),
        vec![],
        &RecordBatchOptions::new().with_row_count(Some(rows)),
    )?)
}
