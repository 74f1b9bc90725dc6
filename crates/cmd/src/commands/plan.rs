// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::common::{load_expected, open_dataset};
use anyhow::Result;
use reconcile::ReconcilePlan;
use std::fmt::Write;
use std::path::Path;

fn list(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}

/// Plan command - compares stored and expected schemas without reading data
///
/// Conflicts are reported in the output rather than returned as an error so
/// every problem is visible at once.
pub fn plan_command<F>(path: &Path, expect: &Path, mut handler: F) -> Result<()>
where
    F: FnMut(&str),
{
    let config = load_expected(expect)?;
    let expected = config.schema()?;
    let actual = open_dataset(path)?.read_schema()?;

    let plan = ReconcilePlan::compute(&actual, &expected);

    let mut output = String::new();
    writeln!(output, "Present: {}", list(plan.present()))?;
    writeln!(output, "Missing: {}", list(plan.missing()))?;
    if !plan.untyped().is_empty() {
        writeln!(output, "Untyped: {}", list(plan.untyped()))?;
    }
    writeln!(output, "Extra:   {} ({:?})", list(plan.extra()), config.extra_columns)?;
    if plan.conflicts().is_empty() {
        writeln!(output, "Conflicts: (none)")?;
    } else {
        writeln!(output, "Conflicts:")?;
        for conflict in plan.conflicts() {
            writeln!(
                output,
                "  {}: stored {}, expected {}",
                conflict.column, conflict.actual, conflict.expected
            )?;
        }
    }

    match plan.check(&expected, &config.options()) {
        Ok(()) if plan.is_identity() => writeln!(output, "Status: identical")?,
        Ok(()) => writeln!(output, "Status: ok")?,
        Err(e) => writeln!(output, "Status: error: {e}")?,
    }

    handler(&output);
    Ok(())
}
