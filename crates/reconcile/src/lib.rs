// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Schema reconciliation for columnar datasets
//!
//! Given a stored dataset and the schema a caller expects, produce an Arrow
//! batch with exactly the expected columns in the expected order. Columns
//! added to the expected schema after the data was written come back as
//! typed all-null columns; stored columns that are no longer expected are
//! dropped (or rejected, by option).

pub mod config;
pub mod dataset;
pub mod error;
pub mod null_padding;
pub mod profile;
pub mod reconciler;
pub mod schema;
pub mod types;
pub mod writer;

pub use config::{ColumnConfig, ExpectedSchemaConfig};
pub use dataset::{CsvDataset, DatasetHandle, MemoryDataset, ParquetDataset};
pub use error::{Error, Result};
pub use null_padding::null_column;
pub use profile::{Measurement, MemoryGauge, format_size, measure, measure_memory};
pub use reconciler::{
    ExtraColumnPolicy, ReconcileOptions, ReconcilePlan, SchemaReconciler, TypeConflict,
    missing_columns, reconcile,
};
pub use schema::{Column, Schema};
pub use types::ColumnType;
pub use writer::{ParquetCompression, write_csv, write_parquet};
