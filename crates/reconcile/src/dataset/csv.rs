// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::{DatasetHandle, select_columns};
use crate::error::{Error, Result};
use crate::schema::Schema;
use arrow_array::RecordBatch;
use arrow_csv::ReaderBuilder;
use arrow_csv::reader::Format;
use arrow_schema::SchemaRef;
use arrow_select::concat::concat_batches;
use diagnostics::debug;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Rows sampled for type inference unless configured otherwise
pub const DEFAULT_MAX_INFER_RECORDS: usize = 1000;

/// A CSV file with a header row.
///
/// CSV is row-oriented: every read parses whole rows, and the requested
/// columns are projected afterwards.
#[derive(Debug, Clone)]
pub struct CsvDataset {
    path: PathBuf,
    max_infer_records: usize,
}

impl CsvDataset {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(Error::source_unavailable(format!(
                "csv file not found: {}",
                path.display()
            )));
        }
        Ok(Self {
            path,
            max_infer_records: DEFAULT_MAX_INFER_RECORDS,
        })
    }

    #[must_use]
    pub fn with_max_infer_records(mut self, max: usize) -> Self {
        self.max_infer_records = max;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_file(&self) -> Result<File> {
        File::open(&self.path)
            .map_err(|e| Error::source_unavailable(format!("open {}: {}", self.path.display(), e)))
    }

    fn infer_arrow_schema(&self) -> Result<SchemaRef> {
        let format = Format::default().with_header(true);
        let (schema, sampled) = format
            .infer_schema(self.open_file()?, Some(self.max_infer_records))
            .map_err(|e| {
                Error::source_unavailable(format!("csv header {}: {}", self.path.display(), e))
            })?;
        debug!("Inferred csv schema from {rows} rows", rows: sampled);
        Ok(Arc::new(schema))
    }

    fn read_all(&self) -> Result<RecordBatch> {
        let schema = self.infer_arrow_schema()?;
        let reader = ReaderBuilder::new(schema.clone())
            .with_header(true)
            .build(self.open_file()?)
            .map_err(|e| Error::source_unavailable(format!("csv reader: {e}")))?;

        let mut batches = Vec::new();
        for batch in reader {
            batches.push(batch.map_err(|e| {
                Error::source_unavailable(format!(
                    "csv parse: {e} (types were inferred from the first {} rows; \
                     raise with_max_infer_records to sample more)",
                    self.max_infer_records
                ))
            })?);
        }
        Ok(concat_batches(&schema, &batches)?)
    }
}

impl DatasetHandle for CsvDataset {
    fn read_schema(&self) -> Result<Schema> {
        let schema = self.infer_arrow_schema()?;
        Schema::from_arrow(&schema)
    }

    fn read_columns(&self, names: &[String]) -> Result<RecordBatch> {
        let all = self.read_all()?;
        select_columns(&all, names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnType;
    use arrow_array::Array;

    type TestResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    #[test]
    fn test_infer_and_project() -> TestResult<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("users.csv");
        std::fs::write(&path, "user_id,username,active\n1,ann,true\n2,,false\n")?;

        let dataset = CsvDataset::open(&path)?;
        let schema = dataset.read_schema()?;
        assert_eq!(schema.get("user_id"), Some(&ColumnType::Int64));
        assert_eq!(schema.get("username"), Some(&ColumnType::String));
        assert_eq!(schema.get("active"), Some(&ColumnType::Boolean));

        let out = dataset.read_columns(&["username".to_string()])?;
        assert_eq!(out.num_rows(), 2);
        assert_eq!(out.column(0).null_count(), 1);

        let rows = dataset.read_columns(&[])?;
        assert_eq!(rows.num_columns(), 0);
        assert_eq!(rows.num_rows(), 2);
        Ok(())
    }

    #[test]
    fn test_empty_column_infers_null() -> TestResult<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("users.csv");
        std::fs::write(&path, "user_id,signup_date\n1,\n2,\n")?;

        let schema = CsvDataset::open(&path)?.read_schema()?;
        assert_eq!(schema.get("signup_date"), Some(&ColumnType::Null));
        Ok(())
    }

    #[test]
    fn test_late_type_change_names_inference_limit() -> TestResult<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("codes.csv");
        std::fs::write(&path, "code\n1\n2\nx9\n")?;

        let dataset = CsvDataset::open(&path)?.with_max_infer_records(2);
        let err = dataset
            .read_columns(&["code".to_string()])
            .expect_err("x9 is not an integer");
        match err {
            Error::SourceUnavailable(msg) => {
                assert!(msg.contains("first 2 rows"), "{msg}");
                assert!(msg.contains("with_max_infer_records"), "{msg}");
            }
            other => return Err(format!("unexpected error: {other}").into()),
        }

        // Sampling every row infers a string column instead.
        let wide = CsvDataset::open(&path)?.with_max_infer_records(10);
        assert_eq!(wide.read_schema()?.get("code"), Some(&ColumnType::String));
        Ok(())
    }
}
