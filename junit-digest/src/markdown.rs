// Copyright (c) The junit-digest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Render a report as a Markdown document.

use crate::{
    render::{format_seconds, group_by_class},
    report::{SuiteSummary, TestStatus},
};
use swrite::{SWrite, swriteln};

/// Renders the report as a complete Markdown document: a summary section for
/// the root, then one recursively nested section per child suite.
pub(crate) fn render(root: &SuiteSummary) -> String {
    let mut out = String::new();
    swriteln!(out, "# Test Report: {}", root.name);
    swriteln!(out);
    swriteln!(out, "## Summary");
    swriteln!(out);
    swriteln!(out, "- Tests: **{}**", root.tests);
    swriteln!(out, "- {}: **{}**", TestStatus::Passed.badge(), root.passed());
    swriteln!(out, "- {}: **{}**", TestStatus::Failed.badge(), root.failures);
    swriteln!(out, "- {}: **{}**", TestStatus::Error.badge(), root.errors);
    swriteln!(out, "- {}: **{}**", TestStatus::Skipped.badge(), root.skipped);
    swriteln!(out, "- Total time: **{}s**", format_seconds(root.time_seconds));
    swriteln!(out);

    for suite in &root.child_suites {
        append_suite(&mut out, suite, 2);
    }

    out
}

/// Appends one suite section at the given heading level, then recurses into
/// its child suites one level deeper.
fn append_suite(out: &mut String, suite: &SuiteSummary, level: usize) {
    // The two trailing spaces after each counter line are Markdown hard line
    // breaks.
    swriteln!(out, "{} Suite: {}", "#".repeat(level), suite.name);
    swriteln!(out);
    swriteln!(out, "- Tests: {}  ", suite.tests);
    swriteln!(out, "- {}: {}  ", TestStatus::Failed.badge(), suite.failures);
    swriteln!(out, "- {}: {}  ", TestStatus::Error.badge(), suite.errors);
    swriteln!(out, "- {}: {}  ", TestStatus::Skipped.badge(), suite.skipped);
    swriteln!(out, "- Time: {}s  ", format_seconds(suite.time_seconds));
    swriteln!(out);

    for (class_name, cases) in group_by_class(&suite.test_cases) {
        swriteln!(out, "{} Class: {}", "#".repeat(level + 2), class_name);
        swriteln!(out);
        swriteln!(out, "| Test | Status | Time (s) |");
        swriteln!(out, "|---|---|---:|");
        for case in cases {
            swriteln!(
                out,
                "| {} | {} | {} |",
                case.name,
                case.status.badge(),
                format_seconds(case.time_seconds)
            );
        }
        swriteln!(out);
    }

    for child in &suite.child_suites {
        append_suite(out, child, level + 1);
    }
}
