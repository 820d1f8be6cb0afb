// Copyright (c) The junit-digest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Render a report as a self-contained HTML document.
//!
//! Suite sections are `<details open>` (expanded), class sections plain
//! `<details>` (collapsed), and each test entry carries its normalized
//! status as a CSS class. Names and messages are embedded verbatim, without
//! HTML escaping.

use crate::{
    render::{format_seconds, group_by_class},
    report::SuiteSummary,
};
use swrite::{SWrite, swriteln};

const STYLE: &str = "body{font-family:Segoe UI,Arial;margin:20px} \
table{border-collapse:collapse;width:100%} \
th,td{border:1px solid #ddd;padding:6px} th{background:#f4f4f4}\n\
.passed{color:green}.failed{color:red}.error{color:#b00020}.skipped{color:orange}";

/// Renders the report as a complete HTML document: an inline stylesheet, a
/// summary block for the root, then one collapsible section per child suite.
pub(crate) fn render(root: &SuiteSummary) -> String {
    let mut out = String::new();
    swriteln!(out, "<!doctype html>");
    swriteln!(out, "<html><head><meta charset=\"utf-8\"><title>Test Report</title>");
    swriteln!(out, "<style>");
    swriteln!(out, "{STYLE}");
    swriteln!(out, "</style></head><body>");
    swriteln!(out, "<h1>Test Report: {}</h1>", root.name);
    swriteln!(out, "<h2>Summary</h2>");
    swriteln!(out, "<p>Tests: {}<br/>", root.tests);
    swriteln!(out, "✔️ Passed: {}<br/>", root.passed());
    swriteln!(out, "❌ Failed: {}<br/>", root.failures);
    swriteln!(out, "⚠️ Errors: {}<br/>", root.errors);
    swriteln!(out, "➖ Skipped: {}<br/>", root.skipped);
    swriteln!(out, "Total time: {}s</p>", format_seconds(root.time_seconds));

    for suite in &root.child_suites {
        append_suite(&mut out, suite, 2);
    }

    swriteln!(out, "</body></html>");
    out
}

/// Appends one suite as an expanded `<details>` block, its classes as
/// collapsed blocks, then recurses into child suites one level deeper.
fn append_suite(out: &mut String, suite: &SuiteSummary, level: usize) {
    let indent = " ".repeat(level * 4);

    swriteln!(out, "{indent}<details open>");
    swriteln!(
        out,
        "{indent}  <summary><strong>Suite:</strong> {} (Tests: {}, ❌ {} failed, ⚠️ {} errors, ➖ {} skipped, Time: {}s)</summary>",
        suite.name,
        suite.tests,
        suite.failures,
        suite.errors,
        suite.skipped,
        format_seconds(suite.time_seconds)
    );

    for (class_name, cases) in group_by_class(&suite.test_cases) {
        swriteln!(out, "{indent}  <details>");
        swriteln!(out, "{indent}    <summary><strong>Class:</strong> {class_name}</summary>");
        swriteln!(out, "{indent}    <ul>");
        for case in cases {
            swriteln!(
                out,
                "{indent}      <li class='{}'>{} — {} ({}s)</li>",
                case.status.as_str(),
                case.name,
                case.status.badge(),
                format_seconds(case.time_seconds)
            );
        }
        swriteln!(out, "{indent}    </ul>");
        swriteln!(out, "{indent}  </details>");
    }

    for child in &suite.child_suites {
        append_suite(out, child, level + 1);
    }

    swriteln!(out, "{indent}</details>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ALL_TESTSUITES_NAME, TestCaseResult, TestStatus};

    fn sample_root() -> SuiteSummary {
        let mut suite = SuiteSummary::new("alpha");
        suite.tests = 2;
        suite.failures = 1;
        suite.time_seconds = 1.5;

        let mut failed = TestCaseResult::new("one", TestStatus::Failed);
        failed.class_name = "com.example.Alpha".to_owned();
        failed.time_seconds = 0.5;
        suite.test_cases.push(failed);

        let mut skipped = TestCaseResult::new("two", TestStatus::Skipped);
        skipped.class_name = "com.example.Alpha".to_owned();
        suite.test_cases.push(skipped);

        let mut root = SuiteSummary::new(ALL_TESTSUITES_NAME);
        root.add_child_suite(suite);
        root
    }

    #[test]
    fn renders_complete_document() {
        let rendered = render(&sample_root());

        assert!(rendered.starts_with("<!doctype html>\n"));
        assert!(rendered.ends_with("</body></html>\n"));
        assert!(rendered.contains("<h1>Test Report: All TestSuites</h1>"));
        assert!(rendered.contains("<style>"));
        assert!(rendered.contains(".passed{color:green}"));
        assert!(rendered.contains("✔️ Passed: 1<br/>"));
        assert!(rendered.contains("Total time: 1.5s</p>"));
    }

    #[test]
    fn suites_expand_and_classes_collapse() {
        let rendered = render(&sample_root());

        assert!(rendered.contains("<details open>"));
        assert!(
            rendered.contains("<summary><strong>Suite:</strong> alpha (Tests: 2, ❌ 1 failed, ⚠️ 0 errors, ➖ 0 skipped, Time: 1.5s)</summary>")
        );
        // Class sections are collapsed: a plain <details> with the class
        // summary right after it.
        assert!(rendered.contains("  <details>\n"));
        assert!(rendered.contains("<summary><strong>Class:</strong> com.example.Alpha</summary>"));
    }

    #[test]
    fn test_entries_carry_status_classes() {
        let rendered = render(&sample_root());

        assert!(rendered.contains("<li class='failed'>one — ❌ Failed (0.5s)</li>"));
        assert!(rendered.contains("<li class='skipped'>two — ➖ Skipped (0s)</li>"));
    }

    #[test]
    fn nested_suites_indent_one_level_deeper() {
        let mut inner = SuiteSummary::new("inner");
        inner.tests = 1;
        let mut outer = SuiteSummary::new("outer");
        outer.child_suites.push(inner);
        let mut root = SuiteSummary::new(ALL_TESTSUITES_NAME);
        root.add_child_suite(outer);

        let rendered = render(&root);
        // Top-level suites sit at two indent levels, nested ones at three.
        assert!(rendered.contains("\n        <details open>"));
        assert!(rendered.contains("\n            <details open>"));
        assert!(rendered.contains("<strong>Suite:</strong> inner"));
    }

    #[test]
    fn names_are_embedded_verbatim() {
        let mut case = TestCaseResult::new("checks <b> & friends", TestStatus::Passed);
        case.class_name = "html.Raw".to_owned();
        let mut suite = SuiteSummary::new("raw");
        suite.test_cases.push(case);
        let mut root = SuiteSummary::new(ALL_TESTSUITES_NAME);
        root.add_child_suite(suite);

        let rendered = render(&root);
        assert!(rendered.contains("checks <b> & friends"));
    }
}
