// Copyright (c) The junit-digest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line wrapper around the [`junit_digest`] library: argument
//! parsing, file I/O, and exit-code selection. The rendering pipeline
//! itself lives in the library.

mod dispatch;
mod errors;
mod output;

pub use dispatch::App;
pub use errors::ExpectedError;
