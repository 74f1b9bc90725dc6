// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::common::{FileFormat, load_expected, open_dataset};
use anyhow::{Result, anyhow};
use arrow_cast::pretty::pretty_format_batches;
use reconcile::{ParquetCompression, SchemaReconciler, write_csv, write_parquet};
use std::path::Path;

/// Reconcile command - reshapes a stored dataset to an expected schema
///
/// With `output` the result is written (format from its extension),
/// otherwise the table is rendered for the handler.
pub fn reconcile_command<F>(
    path: &Path,
    expect: &Path,
    output: Option<&Path>,
    compression: ParquetCompression,
    mut handler: F,
) -> Result<()>
where
    F: FnMut(&str),
{
    let config = load_expected(expect)?;
    let expected = config.schema()?;
    let dataset = open_dataset(path)?;

    let reconciler = SchemaReconciler::new(config.options());
    let batch = reconciler.reconcile_dataset(dataset.as_ref(), &expected)?;

    match output {
        Some(out) => {
            match FileFormat::from_path(out)? {
                FileFormat::Parquet => write_parquet(out, &batch, compression)?,
                FileFormat::Csv => write_csv(out, &batch)?,
            }
            handler(&format!(
                "Wrote {} rows x {} columns to {}\n",
                batch.num_rows(),
                batch.num_columns(),
                out.display()
            ));
        }
        None => {
            let table = pretty_format_batches(&[batch])
                .map_err(|e| anyhow!("Failed to format table: {}", e))?;
            handler(&format!("{table}\n"));
        }
    }
    Ok(())
}
