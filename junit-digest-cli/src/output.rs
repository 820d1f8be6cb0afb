// Copyright (c) The junit-digest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Args;
use tracing_subscriber::filter::LevelFilter;

/// Diagnostic output options.
#[derive(Copy, Clone, Debug, Args)]
pub(crate) struct OutputOpts {
    /// Verbose output
    #[arg(long, short)]
    pub(crate) verbose: bool,
}

impl OutputOpts {
    /// Initializes the tracing subscriber. Diagnostics go to stderr so the
    /// confirmation line on stdout stays clean.
    pub(crate) fn init(self) {
        let level = if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        };
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}
