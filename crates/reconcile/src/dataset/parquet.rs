// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::{DatasetHandle, rows_only, select_columns};
use crate::error::{Error, Result};
use crate::schema::Schema;
use arrow_array::{RecordBatch, RecordBatchReader};
use arrow_select::concat::concat_batches;
use diagnostics::debug;
use parquet::arrow::ProjectionMask;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::fs::File;
use std::path::{Path, PathBuf};

/// A Parquet file on local disk.
///
/// Column reads push a projection mask into the Parquet reader so only the
/// requested column chunks are decoded.
#[derive(Debug, Clone)]
pub struct ParquetDataset {
    path: PathBuf,
}

impl ParquetDataset {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(Error::source_unavailable(format!(
                "parquet file not found: {}",
                path.display()
            )));
        }
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn builder(&self) -> Result<ParquetRecordBatchReaderBuilder<File>> {
        let file = File::open(&self.path).map_err(|e| {
            Error::source_unavailable(format!("open {}: {}", self.path.display(), e))
        })?;
        ParquetRecordBatchReaderBuilder::try_new(file).map_err(|e| {
            Error::source_unavailable(format!("parquet metadata {}: {}", self.path.display(), e))
        })
    }

    /// Row count from the footer, without decoding any column
    pub fn num_rows(&self) -> Result<usize> {
        let rows = self.builder()?.metadata().file_metadata().num_rows();
        usize::try_from(rows)
            .map_err(|_| Error::source_unavailable(format!("invalid row count {rows}")))
    }
}

impl DatasetHandle for ParquetDataset {
    fn read_schema(&self) -> Result<Schema> {
        let builder = self.builder()?;
        Schema::from_arrow(builder.schema())
    }

    fn read_columns(&self, names: &[String]) -> Result<RecordBatch> {
        if names.is_empty() {
            return rows_only(self.num_rows()?);
        }

        let builder = self.builder()?;
        let file_schema = builder.schema().clone();
        let roots = names
            .iter()
            .map(|name| {
                file_schema.index_of(name).map_err(|_| {
                    Error::source_unavailable(format!("column '{name}' not in {}", self.path.display()))
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        debug!(
            "Projecting {requested} of {total} parquet columns",
            requested: roots.len(),
            total: file_schema.fields().len()
        );

        let mask = ProjectionMask::roots(builder.parquet_schema(), roots);
        let reader = builder
            .with_projection(mask)
            .build()
            .map_err(|e| Error::source_unavailable(format!("build reader: {e}")))?;
        let projected = reader.schema();

        let mut batches = Vec::new();
        for batch in reader {
            batches.push(batch.map_err(|e| Error::source_unavailable(format!("read batch: {e}")))?);
        }

        // Projection keeps file order; callers get their own order back.
        let combined = concat_batches(&projected, &batches)?;
        select_columns(&combined, names)
    }
}
