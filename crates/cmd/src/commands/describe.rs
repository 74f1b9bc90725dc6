// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::common::{FileFormat, open_dataset};
use anyhow::Result;
use diagnostics::debug;
use std::fmt::Write;
use std::path::Path;

/// Describe command - shows the stored schema and row count of a dataset
pub fn describe_command<F>(path: &Path, mut handler: F) -> Result<()>
where
    F: FnMut(&str),
{
    debug!("describe_command called for {path}", path: path.display().to_string());

    let format = FileFormat::from_path(path)?;
    let dataset = open_dataset(path)?;
    let schema = dataset.read_schema()?;
    let rows = dataset.read_columns(&[])?.num_rows();

    let width = schema
        .columns()
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    writeln!(output, "File: {}", path.display())?;
    writeln!(output, "Format: {}", format.name())?;
    writeln!(output, "Rows: {rows}")?;
    writeln!(output, "Columns ({}):", schema.len())?;
    for col in schema.columns() {
        writeln!(output, "  {:<width$}  {}", col.name, col.column_type)?;
    }

    handler(&output);
    Ok(())
}
