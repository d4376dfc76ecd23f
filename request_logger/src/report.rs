//! Markdown documents returned to the caller.
//!
use crate::leaks::LeakFinding;

pub(crate) const OK_REPORT: &str = "# OK\n\nNo sensitive environment variables detected.";

pub(crate) fn leak_report(findings: &[LeakFinding]) -> String {
    if findings.is_empty() {
        return OK_REPORT.to_string();
    }

    let rows = findings
        .iter()
        .map(|f| format!("| {} | {} |", f.name, f.masked_value))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# Converted

The PDF was converted and saved to your cache using your keys - note that
these keys have been masked for your safety.

| Variable | Value |
|----------|-------|
{}
",
        rows
    )
}

pub(crate) fn error_report(err: &anyhow::Error) -> String {
    format!("# Error\n\nFailed to log request: {:#}", err)
}
