//! CLI output formatting.

use std::io::{self, Write};

use serde::Serialize;

use dutydraw_core::registry::PeriodRegistry;
use dutydraw_orchestration::interfaces::RevealRequest;

/// Shown in place of a value the row never reached. Empty or
/// whitespace-only cells display the same way.
pub const MISSING_VALUE: &str = "—";

/// Slot text for a revealed value.
#[must_use]
pub fn format_value(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => MISSING_VALUE,
    }
}

/// One reveal as a line of text.
#[must_use]
pub fn format_reveal(request: &RevealRequest) -> String {
    format!(
        "{} → {}",
        request.label,
        format_value(request.value.as_deref())
    )
}

/// Numbered period list, in registry order.
#[must_use]
pub fn format_period_list(registry: &PeriodRegistry) -> String {
    registry
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:>2}. {p}\n", i + 1))
        .collect()
}

/// Machine-readable summary of a draw session.
#[derive(Debug, Serialize)]
pub struct DrawReport<'a> {
    pub period: &'a str,
    pub total: usize,
    pub complete: bool,
    pub revealed: &'a [RevealRequest],
}

/// Write a draw report as pretty JSON followed by a newline.
pub fn write_json(out: &mut dyn Write, report: &DrawReport<'_>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dutydraw_core::dataset::Dataset;

    fn request(value: Option<&str>) -> RevealRequest {
        RevealRequest {
            index: 0,
            id: Some("1".into()),
            name: Some("Alice".into()),
            label: "1. Alice".into(),
            period: "P1".into(),
            value: value.map(str::to_owned),
        }
    }

    #[test]
    fn reveal_line() {
        assert_eq!(format_reveal(&request(Some("X"))), "1. Alice → X");
    }

    #[test]
    fn missing_value_placeholder() {
        assert_eq!(format_reveal(&request(None)), "1. Alice → —");
        assert_eq!(format_value(Some("  ")), MISSING_VALUE);
    }

    #[test]
    fn blank_cell_reveals_as_placeholder() {
        assert_eq!(format_reveal(&request(Some(""))), "1. Alice → —");
        assert_eq!(format_reveal(&request(Some(" \t"))), "1. Alice → —");
    }

    #[test]
    fn period_list_numbered() {
        let ds = Dataset::parse("id,name,3-4월,5-6월\n").unwrap();
        let list = format_period_list(&PeriodRegistry::from_columns(ds.columns()));
        assert_eq!(list, " 1. 3-4월\n 2. 5-6월\n");
    }

    #[test]
    fn json_report() {
        let reveals = vec![request(Some("X"))];
        let report = DrawReport {
            period: "P1",
            total: 2,
            complete: false,
            revealed: &reveals,
        };
        let mut buf = Vec::new();
        write_json(&mut buf, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["period"], "P1");
        assert_eq!(value["revealed"][0]["value"], "X");
        assert_eq!(value["complete"], false);
    }
}
