// Copyright (c) The junit-digest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8PathBuf;
use junit_digest::ParseError;
use owo_colors::{OwoColorize, Stream};
use std::error::Error;
use thiserror::Error;

// The #[error()] strings are placeholder messages -- the expected way to
// print out errors is with the display_to_stderr method.

/// An error expected in normal operation, mapped to a process exit code.
#[derive(Debug, Error)]
pub enum ExpectedError {
    /// The input file does not exist.
    #[error("input file not found")]
    InputNotFound {
        /// The missing path.
        path: Utf8PathBuf,
    },

    /// The input file exists but could not be read.
    #[error("failed to read input")]
    ReadFailed {
        /// The unreadable path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        err: std::io::Error,
    },

    /// The input file is not a parseable JUnit report.
    #[error("failed to parse report")]
    ParseFailed {
        /// The parse error.
        #[from]
        err: ParseError,
    },

    /// The rendered report could not be written.
    #[error("failed to write report")]
    WriteFailed {
        /// The unwritable path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        err: std::io::Error,
    },
}

impl ExpectedError {
    /// Returns the exit code for the process.
    pub fn process_exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } => 3,
            Self::ReadFailed { .. } | Self::ParseFailed { .. } | Self::WriteFailed { .. } => 1,
        }
    }

    /// Displays this error to stderr.
    pub fn display_to_stderr(&self) {
        let mut next_error = match self {
            Self::InputNotFound { path } => {
                tracing::error!(
                    "input file not found: {}",
                    path.if_supports_color(Stream::Stderr, |x| x.bold())
                );
                None
            }
            Self::ReadFailed { path, err } => {
                tracing::error!(
                    "failed to read {}",
                    path.if_supports_color(Stream::Stderr, |x| x.bold())
                );
                Some(err as &dyn Error)
            }
            Self::ParseFailed { err } => {
                tracing::error!("failed to parse report: {}", err);
                err.source()
            }
            Self::WriteFailed { path, err } => {
                tracing::error!(
                    "failed to write {}",
                    path.if_supports_color(Stream::Stderr, |x| x.bold())
                );
                Some(err as &dyn Error)
            }
        };

        while let Some(err) = next_error {
            tracing::error!("\nCaused by:\n  {}", err);
            next_error = err.source();
        }
    }
}
