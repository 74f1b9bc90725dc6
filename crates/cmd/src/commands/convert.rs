// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::common::{FileFormat, open_dataset};
use crate::memory::PEAK_ALLOC;
use anyhow::{Result, anyhow};
use reconcile::{ParquetCompression, format_size, measure_memory, write_csv, write_parquet};
use std::fmt::Write;
use std::path::Path;

fn file_size(path: &Path) -> Result<u64> {
    Ok(std::fs::metadata(path)
        .map_err(|e| anyhow!("Failed to stat {}: {}", path.display(), e))?
        .len())
}

/// Convert command - rewrites a dataset between CSV and Parquet
///
/// Reports the read time and peak heap usage of the input, and both file
/// sizes, which is the row-versus-column comparison in one line each.
pub fn convert_command<F>(
    input: &Path,
    output: &Path,
    compression: ParquetCompression,
    mut handler: F,
) -> Result<()>
where
    F: FnMut(&str),
{
    let in_format = FileFormat::from_path(input)?;
    let out_format = FileFormat::from_path(output)?;
    let dataset = open_dataset(input)?;

    let read_label = format!("read {}", in_format.name());
    let (batch, measured) = measure_memory(&read_label, &PEAK_ALLOC, || {
        let schema = dataset.read_schema()?;
        dataset.read_columns(&schema.names())
    });
    let batch = batch?;

    match out_format {
        FileFormat::Parquet => write_parquet(output, &batch, compression)?,
        FileFormat::Csv => write_csv(output, &batch)?,
    }

    let mut report = String::new();
    writeln!(
        report,
        "Read {} rows from {} in {:.3} seconds",
        batch.num_rows(),
        input.display(),
        measured.elapsed.as_secs_f64()
    )?;
    writeln!(report, "Memory usage: {}", format_size(measured.peak_bytes))?;
    writeln!(
        report,
        "{:<8} {:>12}  {}",
        in_format.name(),
        format_size(file_size(input)?),
        input.display()
    )?;
    let label = match out_format {
        FileFormat::Parquet => format!("parquet/{compression}"),
        FileFormat::Csv => "csv".to_string(),
    };
    writeln!(
        report,
        "{:<8} {:>12}  {}",
        label,
        format_size(file_size(output)?),
        output.display()
    )?;

    handler(&report);
    Ok(())
}
