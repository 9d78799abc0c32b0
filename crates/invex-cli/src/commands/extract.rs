//! Extract command - turn a folder of invoice PDFs into one report.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use invex_core::{BatchRunner, COLUMNS, FileOutcome, InvoiceRecord, ReportFormat, write_report};

/// Columns shown for the first record after a run.
const SAMPLE_COLUMNS: usize = 8;

/// Arguments for the extract command.
#[derive(Args, Default)]
pub struct ExtractArgs {
    /// Directory containing invoice PDFs
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory the report is written to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

/// Report formats.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Excel workbook
    Xlsx,
    /// Comma-separated values
    Csv,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Xlsx => ReportFormat::Xlsx,
            OutputFormat::Csv => ReportFormat::Csv,
        }
    }
}

pub fn run(args: ExtractArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = super::load_config(config_path)?;
    if let Some(input) = args.input {
        config.paths.input_dir = input;
    }
    if let Some(output) = args.output {
        config.paths.output_dir = output;
    }
    if let Some(format) = args.format {
        config.report.format = format.into();
    }

    let files = BatchRunner::scan_input_dir(&config.paths.input_dir)?;
    if files.is_empty() {
        println!(
            "{} No PDF files found in {}",
            style("ℹ").blue(),
            config.paths.input_dir.display()
        );
    } else {
        println!(
            "{} Found {} PDF files to process",
            style("ℹ").blue(),
            files.len()
        );
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let runner = BatchRunner::new(config.extraction.clone());
    let outcome = runner.run_files(&files, |event| {
        let path = match event {
            FileOutcome::Extracted(path, _) | FileOutcome::Failed(path, _) => path,
        };
        pb.set_message(
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        pb.inc(1);
    });
    pb.finish_and_clear();

    let report_path = write_report(
        &outcome.records,
        &config.report,
        &config.paths.output_dir,
        config.paths.create_output_dir,
    )?;

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        outcome.discovered,
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(outcome.records.len()).green(),
        style(outcome.failed.len()).red()
    );

    if !outcome.failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for failed in &outcome.failed {
            println!("  - {}: {}", failed.path.display(), failed.error);
        }
    }

    println!();
    println!(
        "{} Report written to {}",
        style("✓").green(),
        report_path.display()
    );

    if let Some(first) = outcome.records.first() {
        print_sample(first);
    }

    Ok(())
}

fn print_sample(record: &InvoiceRecord) {
    println!();
    println!("{}", style("Sample (first record):").bold());
    for (name, value) in COLUMNS.iter().zip(record.row()).take(SAMPLE_COLUMNS) {
        println!("  {:<16} {}", style(name).dim(), value);
    }
}
