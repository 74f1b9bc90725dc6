// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Writing batches back out as Parquet or CSV

use crate::error::{Error, Result};
use arrow_array::RecordBatch;
use arrow_csv::WriterBuilder;
use diagnostics::debug;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, GzipLevel, ZstdLevel};
use parquet::file::properties::WriterProperties;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

/// Parquet page compression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParquetCompression {
    None,
    #[default]
    Snappy,
    Zstd,
    Gzip,
}

impl ParquetCompression {
    fn codec(self) -> Compression {
        match self {
            ParquetCompression::None => Compression::UNCOMPRESSED,
            ParquetCompression::Snappy => Compression::SNAPPY,
            ParquetCompression::Zstd => Compression::ZSTD(ZstdLevel::default()),
            ParquetCompression::Gzip => Compression::GZIP(GzipLevel::default()),
        }
    }
}

impl FromStr for ParquetCompression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "uncompressed" => Ok(ParquetCompression::None),
            "snappy" => Ok(ParquetCompression::Snappy),
            "zstd" => Ok(ParquetCompression::Zstd),
            "gzip" => Ok(ParquetCompression::Gzip),
            other => Err(Error::config(format!("unknown compression '{other}'"))),
        }
    }
}

impl fmt::Display for ParquetCompression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParquetCompression::None => "none",
            ParquetCompression::Snappy => "snappy",
            ParquetCompression::Zstd => "zstd",
            ParquetCompression::Gzip => "gzip",
        })
    }
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| Error::write(format!("create {}: {}", path.display(), e)))
}

/// Write a batch to a Parquet file
pub fn write_parquet<P: AsRef<Path>>(
    path: P,
    batch: &RecordBatch,
    compression: ParquetCompression,
) -> Result<()> {
    let path = path.as_ref();
    let props = WriterProperties::builder()
        .set_compression(compression.codec())
        .build();
    let mut writer = ArrowWriter::try_new(create(path)?, batch.schema(), Some(props))
        .map_err(|e| Error::write(format!("Arrow writer error: {e}")))?;
    writer
        .write(batch)
        .map_err(|e| Error::write(format!("Write batch error: {e}")))?;
    let metadata = writer
        .close()
        .map_err(|e| Error::write(format!("Close writer error: {e}")))?;

    debug!(
        "Wrote {rows} rows to parquet with {codec}",
        rows: metadata.num_rows,
        codec: compression.to_string()
    );
    Ok(())
}

/// Write a batch to a CSV file with a header row
pub fn write_csv<P: AsRef<Path>>(path: P, batch: &RecordBatch) -> Result<()> {
    let path = path.as_ref();
    let mut writer = WriterBuilder::new().with_header(true).build(create(path)?);
    writer
        .write(batch)
        .map_err(|e| Error::write(format!("csv write {}: {}", path.display(), e)))?;

    debug!("Wrote {rows} rows to csv", rows: batch.num_rows());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ParquetDataset;
    use arrow_array::record_batch;

    type TestResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    #[test]
    fn test_write_parquet_footer_row_count() -> TestResult<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("scores.parquet");
        let batch = record_batch!(("score", Float64, [1.5, 2.5, 3.5]))?;

        write_parquet(&path, &batch, ParquetCompression::Gzip)?;
        assert_eq!(ParquetDataset::open(&path)?.num_rows()?, 3);
        Ok(())
    }

    #[test]
    fn test_compression_names() -> Result<()> {
        assert_eq!("ZSTD".parse::<ParquetCompression>()?, ParquetCompression::Zstd);
        assert_eq!("uncompressed".parse::<ParquetCompression>()?, ParquetCompression::None);
        assert!("lz4".parse::<ParquetCompression>().is_err());
        assert_eq!(ParquetCompression::default().to_string(), "snappy");
        Ok(())
    }
}
