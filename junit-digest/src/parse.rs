// Copyright (c) The junit-digest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parse JUnit XML documents into [`SuiteSummary`] trees.

use crate::{
    errors::ParseError,
    report::{
        ALL_TESTSUITES_NAME, SuiteSummary, TestCaseResult, TestStatus, UNNAMED_SUITE, UNNAMED_TEST,
    },
};
use quick_xml::{
    Reader,
    events::{BytesStart, Event, attributes::Attribute},
};

const TESTSUITES_TAG: &[u8] = b"testsuites";
const TESTSUITE_TAG: &[u8] = b"testsuite";
const TESTCASE_TAG: &[u8] = b"testcase";

/// Parses a JUnit XML document into a single [`SuiteSummary`].
///
/// A `testsuites` root produces a synthetic root suite named
/// `All TestSuites` whose counters and elapsed time are the sums over its
/// direct `testsuite` children. A `testsuite` root is returned directly,
/// with no synthetic wrapper. Any other root element is a
/// [`ParseError::UnexpectedRoot`]; a document with no root element at all is
/// a [`ParseError::EmptyDocument`].
pub fn parse_report(xml: &str) -> Result<SuiteSummary, ParseError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(start) => return parse_root(&mut reader, &start, false),
            Event::Empty(start) => return parse_root(&mut reader, &start, true),
            Event::Eof => return Err(ParseError::EmptyDocument),
            // XML declarations, comments, doctypes and stray text ahead of
            // the root element.
            _ => {}
        }
    }
}

fn parse_root(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart<'_>,
    empty: bool,
) -> Result<SuiteSummary, ParseError> {
    let name = start.name();
    if name.as_ref().eq_ignore_ascii_case(TESTSUITES_TAG) {
        let mut root = SuiteSummary::new(ALL_TESTSUITES_NAME);
        if !empty {
            collect_child_suites(reader, &mut root)?;
        }
        Ok(root)
    } else if name.as_ref().eq_ignore_ascii_case(TESTSUITE_TAG) {
        parse_suite(reader, start, empty)
    } else {
        Err(ParseError::UnexpectedRoot(
            String::from_utf8_lossy(name.as_ref()).into_owned(),
        ))
    }
}

/// Reads the direct children of a `testsuites` element, parsing each
/// `testsuite` child and folding its counters into `root`. Other child
/// elements are skipped wholesale, so a suite nested deeper than one level
/// is never picked up here.
fn collect_child_suites(
    reader: &mut Reader<&[u8]>,
    root: &mut SuiteSummary,
) -> Result<(), ParseError> {
    loop {
        match reader.read_event()? {
            Event::Start(child) => {
                if child.name().as_ref().eq_ignore_ascii_case(TESTSUITE_TAG) {
                    let suite = parse_suite(reader, &child, false)?;
                    root.add_child_suite(suite);
                } else {
                    skip_element(reader, &child)?;
                }
            }
            Event::Empty(child) => {
                if child.name().as_ref().eq_ignore_ascii_case(TESTSUITE_TAG) {
                    let suite = parse_suite(reader, &child, true)?;
                    root.add_child_suite(suite);
                }
            }
            Event::End(_) | Event::Eof => break,
            _ => {}
        }
    }
    Ok(())
}

/// Parses one `testsuite` element: declared counters from its attributes,
/// `testcase` children in document order.
///
/// The declared counters are trusted as-is rather than recounted from the
/// test cases. `testsuite` elements nested inside this one are not
/// traversed; only the root-level `testsuites` wrapper aggregates.
fn parse_suite(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart<'_>,
    empty: bool,
) -> Result<SuiteSummary, ParseError> {
    let mut suite = SuiteSummary::new(UNNAMED_SUITE);
    for attr in start.attributes().flatten() {
        match attr.key.as_ref() {
            b"name" => {
                if let Some(value) = text_attr(&attr) {
                    suite.name = value;
                }
            }
            b"tests" => suite.tests = int_attr(&attr),
            b"failures" => suite.failures = int_attr(&attr),
            b"errors" => suite.errors = int_attr(&attr),
            b"skipped" => suite.skipped = int_attr(&attr),
            b"time" => suite.time_seconds = float_attr(&attr),
            _ => {}
        }
    }
    if empty {
        return Ok(suite);
    }

    loop {
        match reader.read_event()? {
            Event::Start(child) => {
                if child.name().as_ref().eq_ignore_ascii_case(TESTCASE_TAG) {
                    suite.test_cases.push(parse_test_case(&child));
                }
                // Skips the whole subtree: failure/error/skipped bodies of a
                // testcase, and any testsuite elements nested in this one.
                skip_element(reader, &child)?;
            }
            Event::Empty(child) => {
                if child.name().as_ref().eq_ignore_ascii_case(TESTCASE_TAG) {
                    suite.test_cases.push(parse_test_case(&child));
                }
            }
            Event::End(_) | Event::Eof => break,
            _ => {}
        }
    }
    Ok(suite)
}

fn parse_test_case(start: &BytesStart<'_>) -> TestCaseResult {
    let mut name = None;
    let mut class_name = None;
    let mut time_seconds = 0.0;
    let mut raw_status = None;
    for attr in start.attributes().flatten() {
        match attr.key.as_ref() {
            b"name" => name = text_attr(&attr),
            b"classname" => class_name = text_attr(&attr),
            b"time" => time_seconds = float_attr(&attr),
            b"status" => raw_status = text_attr(&attr),
            _ => {}
        }
    }

    let mut case = TestCaseResult::new(
        name.unwrap_or_else(|| UNNAMED_TEST.to_owned()),
        TestStatus::from_raw(raw_status.as_deref()),
    );
    case.class_name = class_name.unwrap_or_default();
    case.time_seconds = time_seconds;
    case
}

/// Skips an element and its entire subtree.
fn skip_element(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<(), ParseError> {
    reader.read_to_end(start.name())?;
    Ok(())
}

/// Reads a text attribute, or `None` if the value cannot be decoded.
fn text_attr(attr: &Attribute<'_>) -> Option<String> {
    attr.unescape_value().ok().map(|value| value.into_owned())
}

/// Reads a base-10 integer attribute. Unparsable values (including negative
/// ones) become 0; never fails.
fn int_attr(attr: &Attribute<'_>) -> usize {
    text_attr(attr)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Reads a decimal attribute, period as the separator regardless of host
/// locale. Unparsable, negative or non-finite values become 0.0; never
/// fails.
fn float_attr(attr: &Attribute<'_>) -> f64 {
    text_attr(attr)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|seconds| seconds.is_finite() && *seconds >= 0.0)
        .unwrap_or(0.0)
}
