// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use cmd::commands;
use reconcile::ParquetCompression;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "colpond")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Enable debug logging (overrides COLPOND_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the stored schema and row count of a dataset
    Describe {
        /// Parquet or CSV file
        path: PathBuf,
    },
    /// Compare a dataset's schema with an expected schema, without reading data
    Plan {
        /// Parquet or CSV file
        path: PathBuf,
        /// Expected schema YAML
        #[arg(short, long)]
        expect: PathBuf,
    },
    /// Read a dataset shaped to an expected schema
    Reconcile(ReconcileArgs),
    /// Rewrite a dataset between CSV and Parquet, reporting size and read time
    Convert {
        input: PathBuf,
        output: PathBuf,
        /// Parquet compression: none, snappy, zstd, gzip
        #[arg(short, long, default_value = "snappy")]
        compression: ParquetCompression,
    },
}

#[derive(Args)]
struct ReconcileArgs {
    /// Parquet or CSV file
    path: PathBuf,
    /// Expected schema YAML
    #[arg(short, long)]
    expect: PathBuf,
    /// Write the result here instead of printing it
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Parquet compression for --output: none, snappy, zstd, gzip
    #[arg(short, long, default_value = "snappy")]
    compression: ParquetCompression,
}

#[allow(clippy::print_stdout)]
fn print(output: &str) {
    print!("{output}");
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        diagnostics::init_with_level(emit::Level::Debug);
    } else {
        diagnostics::init_diagnostics();
    }

    match cli.command {
        Commands::Describe { path } => commands::describe_command(&path, print),
        Commands::Plan { path, expect } => commands::plan_command(&path, &expect, print),
        Commands::Reconcile(args) => commands::reconcile_command(
            &args.path,
            &args.expect,
            args.output.as_deref(),
            args.compression,
            print,
        ),
        Commands::Convert {
            input,
            output,
            compression,
        } => commands::convert_command(&input, &output, compression, print),
    }
}
