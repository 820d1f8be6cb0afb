// Copyright (c) The junit-digest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{errors::ExpectedError, output::OutputOpts};
use camino::Utf8PathBuf;
use clap::Parser;
use junit_digest::{ReportFormat, parse_report, render};
use tracing::debug;

/// Render JUnit XML test reports as Markdown or HTML.
///
/// Reads a JUnit/XUnit XML report, summarizes it, and writes the rendered
/// document to the output path verbatim.
#[derive(Debug, Parser)]
#[command(version, bin_name = "junit-digest")]
pub struct App {
    /// Path to the JUnit XML report to read
    #[arg(value_name = "INPUT")]
    input: Utf8PathBuf,

    /// Path to write the rendered report to
    #[arg(value_name = "OUTPUT")]
    output: Utf8PathBuf,

    /// Output format: markdown or html (case-insensitive)
    #[arg(long, value_name = "FMT", default_value_t)]
    format: ReportFormat,

    #[command(flatten)]
    output_opts: OutputOpts,
}

impl App {
    /// Executes the app.
    pub fn exec(self) -> Result<(), ExpectedError> {
        self.output_opts.init();
        self.run()?;
        println!("Report written to {}", self.output);
        Ok(())
    }

    fn run(&self) -> Result<(), ExpectedError> {
        if !self.input.exists() {
            return Err(ExpectedError::InputNotFound {
                path: self.input.clone(),
            });
        }

        let xml = fs_err::read_to_string(&self.input).map_err(|err| ExpectedError::ReadFailed {
            path: self.input.clone(),
            err,
        })?;

        let report = parse_report(&xml)?;
        debug!(
            "parsed {}: {} tests across {} top-level suites",
            self.input,
            report.tests,
            report.child_suites.len().max(1),
        );

        let rendered = render(&report, self.format);
        fs_err::write(&self.output, rendered).map_err(|err| ExpectedError::WriteFailed {
            path: self.output.clone(),
            err,
        })?;

        Ok(())
    }
}
