// Copyright (c) The junit-digest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// An error that occurs while parsing a JUnit XML document.
///
/// Only structural problems surface here. Missing or malformed attributes
/// are absorbed by the defaulting rules in
/// [`parse_report`](crate::parse_report) and never raised as errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The document contains no root element.
    #[error("empty XML document")]
    EmptyDocument,

    /// The root element is neither `testsuites` nor `testsuite`.
    #[error("unexpected root element: {0}")]
    UnexpectedRoot(String),

    /// The document is not well-formed XML.
    #[error("malformed XML document")]
    Xml(#[from] quick_xml::Error),
}

/// A report format name outside the recognized set.
///
/// Returned by the [`FromStr`](std::str::FromStr) implementation on
/// [`ReportFormat`](crate::ReportFormat).
#[derive(Debug, Error)]
#[error("unrecognized format {input:?} (expected \"markdown\" or \"html\")")]
pub struct UnknownFormatError {
    /// The rejected input.
    pub input: String,
}
