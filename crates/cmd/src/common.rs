// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Result, anyhow};
use reconcile::{CsvDataset, DatasetHandle, ExpectedSchemaConfig, ParquetDataset};
use std::path::Path;

/// Storage format, chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Parquet,
    Csv,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("parquet" | "pq") => Ok(FileFormat::Parquet),
            Some("csv") => Ok(FileFormat::Csv),
            _ => Err(anyhow!(
                "Unsupported file type '{}': expected .parquet, .pq or .csv",
                path.display()
            )),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FileFormat::Parquet => "parquet",
            FileFormat::Csv => "csv",
        }
    }
}

/// Open a dataset handle for a local file
pub fn open_dataset(path: &Path) -> Result<Box<dyn DatasetHandle>> {
    let handle: Box<dyn DatasetHandle> = match FileFormat::from_path(path)? {
        FileFormat::Parquet => Box::new(ParquetDataset::open(path)?),
        FileFormat::Csv => Box::new(CsvDataset::open(path)?),
    };
    Ok(handle)
}

/// Load an expected-schema YAML file
pub fn load_expected(path: &Path) -> Result<ExpectedSchemaConfig> {
    ExpectedSchemaConfig::from_file(path)
        .map_err(|e| anyhow!("Failed to load expected schema {}: {}", path.display(), e))
}
