//! Plain-text rendering of terms documents and version history.

use std::fmt::Write;

use accord_core::{TermsDocument, TermsVersionSummary};

const MAX_PREVIEW_LINES: usize = 20;

/// Render the active terms as a card: header fields, then a preview of the
/// markdown body.
pub fn render_terms_card(doc: &TermsDocument) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Terms of Use v{} ===", doc.version);
    let _ = writeln!(out, "  {:<16} {}", "id", doc.id);
    let _ = writeln!(out, "  {:<16} {}", "effective_date", doc.effective_date);
    let _ = writeln!(out);

    let lines: Vec<&str> = doc.content_markdown.lines().collect();
    for line in lines.iter().take(MAX_PREVIEW_LINES) {
        let _ = writeln!(out, "  {line}");
    }
    if lines.len() > MAX_PREVIEW_LINES {
        let _ = writeln!(out, "  ... ({} more lines)", lines.len() - MAX_PREVIEW_LINES);
    }
    out
}

/// Render a page of version history, one row per version.
pub fn render_versions_table(versions: &[TermsVersionSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<1} {:<10} {:<12} {:<20} {}",
        "", "VERSION", "EFFECTIVE", "CREATED", "ID"
    );
    for v in versions {
        let marker = if v.is_active { "*" } else { "" };
        let _ = writeln!(
            out,
            "{:<1} {:<10} {:<12} {:<20} {}",
            marker,
            v.version,
            v.effective_date.format("%Y-%m-%d"),
            v.created_at.format("%Y-%m-%d %H:%M"),
            v.id
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use accord_core::DocumentId;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn summary(id: &str, version: &str, is_active: bool) -> TermsVersionSummary {
        TermsVersionSummary {
            id: DocumentId::new(id).unwrap(),
            version: version.into(),
            effective_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            is_active,
            created_at: Utc.with_ymd_and_hms(2025, 12, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn card_shows_header_and_body() {
        let doc = TermsDocument {
            id: DocumentId::new("t3").unwrap(),
            version: "3.0".into(),
            effective_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            content_markdown: "# Terms\n\nBe nice.".into(),
        };
        let card = render_terms_card(&doc);
        assert!(card.starts_with("=== Terms of Use v3.0 ==="));
        assert!(card.contains("2026-01-01"));
        assert!(card.contains("  Be nice."));
        assert!(!card.contains("more lines"));
    }

    #[test]
    fn card_truncates_long_documents() {
        let body = (0..25).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let doc = TermsDocument {
            id: DocumentId::new("t1").unwrap(),
            version: "1.0".into(),
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            content_markdown: body,
        };
        let card = render_terms_card(&doc);
        assert!(card.contains("line 19"));
        assert!(!card.contains("line 20"));
        assert!(card.contains("(5 more lines)"));
    }

    #[test]
    fn table_marks_active_version_and_keeps_order() {
        let table = render_versions_table(&[summary("t2", "2.0", true), summary("t1", "1.0", false)]);
        let rows: Vec<&str> = table.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].starts_with('*'));
        assert!(rows[1].contains("2.0"));
        assert!(rows[2].contains("1.0"));
        assert!(rows[2].contains("2025-12-01 09:30"));
    }
}
