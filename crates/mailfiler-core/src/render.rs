//! Static HTML dashboard rendering
//!
//! The template is an external contract: the two literal markers below and
//! the `status-badge` CSS class (keyed on by the template's client-side
//! counters) must be preserved verbatim.

use crate::{Classification, CoreError, CoreResult};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

/// Marker replaced with the render timestamp
pub const RUN_TIME_MARKER: &str = "{RUN_TIME}";

/// Marker replaced with the generated table rows
pub const REPORT_DATA_MARKER: &str = "<!-- REPORT_DATA -->";

/// One classified message, ready for rendering
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub status: Classification,
    pub subject: String,
    pub filed_dir: String,
    pub timestamp: String,
}

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a Graph receivedDateTime for display: `YYYY-MM-DD HH:MM UTC`.
///
/// Empty input renders empty; anything unparseable passes through unchanged.
pub fn format_received(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M UTC")
            .to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Render the table rows block, or the informational placeholder row when
/// there is nothing to show.
pub fn render_rows(rows: &[ReportRow]) -> String {
    if rows.is_empty() {
        return "<tr><td colspan='4' class='text-center text-gray-500 py-4'>No emails were processed.</td></tr>"
            .to_string();
    }

    rows.iter()
        .map(|row| {
            format!(
                "<tr>\
                 <td class='p-4'><span class='status-badge inline-block px-2 py-1 rounded-full text-xs bg-gray-100'>{}</span></td>\
                 <td class='p-4'>{}</td>\
                 <td class='p-4'>{}</td>\
                 <td class='p-4'>{}</td>\
                 </tr>",
                escape_html(row.status.label()),
                escape_html(&row.subject),
                escape_html(&row.filed_dir),
                escape_html(&row.timestamp),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Load the template file, failing with the path when it is missing.
///
/// Callers check this before any network activity; a run must not get as
/// far as signing in only to fail on an absent template.
pub fn read_template(path: &Path) -> CoreResult<String> {
    if !path.is_file() {
        return Err(CoreError::TemplateNotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Substitute the rows block and the render timestamp into the template
pub fn render_dashboard(template: &str, rows: &[ReportRow], run_time: &str) -> String {
    template
        .replace(RUN_TIME_MARKER, run_time)
        .replace(REPORT_DATA_MARKER, &render_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: Classification, subject: &str) -> ReportRow {
        ReportRow {
            status,
            subject: subject.to_string(),
            filed_dir: "DEMO for PNC".to_string(),
            timestamp: "2024-05-01 12:30 UTC".to_string(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a & b \"q\""), "a &amp; b &quot;q&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_format_received() {
        assert_eq!(format_received("2024-05-01T12:30:00Z"), "2024-05-01 12:30 UTC");
        // Offset timestamps normalize to UTC
        assert_eq!(
            format_received("2024-05-01T14:30:00+02:00"),
            "2024-05-01 12:30 UTC"
        );
        // Malformed passes through, empty stays empty
        assert_eq!(format_received("yesterday"), "yesterday");
        assert_eq!(format_received(""), "");
    }

    #[test]
    fn test_rows_carry_status_badge_class() {
        let html = render_rows(&[row(Classification::Filed, "Quote")]);
        assert!(html.contains("status-badge"));
        assert!(html.contains(">Filed</span>"));
        assert!(html.contains("<td class='p-4'>Quote</td>"));
    }

    #[test]
    fn test_empty_rows_render_placeholder() {
        let html = render_rows(&[]);
        assert!(html.contains("No emails were processed."));
        assert!(!html.contains("status-badge"));
    }

    #[test]
    fn test_subject_is_escaped() {
        let html = render_rows(&[row(Classification::Skipped, "<script>bad()</script>")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;bad()&lt;/script&gt;"));
    }

    #[test]
    fn test_dashboard_substitution() {
        let template = "<html>{RUN_TIME}<table><!-- REPORT_DATA --></table></html>";
        let html = render_dashboard(
            template,
            &[row(Classification::Triage, "Claim Documents")],
            "2024-05-01 12:00:00 UTC",
        );
        assert!(html.contains("2024-05-01 12:00:00 UTC"));
        assert!(html.contains("Claim Documents"));
        assert!(!html.contains(RUN_TIME_MARKER));
        assert!(!html.contains(REPORT_DATA_MARKER));
    }

    #[test]
    fn test_read_template_missing_is_explicit() {
        let err = read_template(Path::new("no/such/dashboard_template.html")).unwrap_err();
        match err {
            CoreError::TemplateNotFound(path) => {
                assert!(path.ends_with("dashboard_template.html"));
            }
            other => panic!("expected TemplateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_template_loads_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.html");
        fs::write(&path, "{RUN_TIME}<!-- REPORT_DATA -->").unwrap();

        let template = read_template(&path).unwrap();
        assert_eq!(template, "{RUN_TIME}<!-- REPORT_DATA -->");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let template = "{RUN_TIME}|<!-- REPORT_DATA -->";
        let rows = vec![
            row(Classification::Filed, "Quote"),
            row(Classification::Skipped, "Lunch"),
        ];
        let a = render_dashboard(template, &rows, "T");
        let b = render_dashboard(template, &rows, "T");
        assert_eq!(a, b);
    }
}
