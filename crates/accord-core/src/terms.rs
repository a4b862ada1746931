//! Terms-of-use documents as returned by the backend.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::DocumentId;

/// The terms-of-use document currently in force.
///
/// The backend guarantees at most one active document; the client does not
/// check this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermsDocument {
    pub id: DocumentId,
    pub version: String,
    pub effective_date: NaiveDate,
    pub content_markdown: String,
}

/// One row of the terms version history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermsVersionSummary {
    pub id: DocumentId,
    pub version: String,
    pub effective_date: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_document_from_backend_row() {
        let json = r##"{
            "id": "3f1c2d9a-0000-4000-8000-000000000001",
            "version": "2.1",
            "effective_date": "2026-03-01",
            "content_markdown": "# Terms of Use\n\nBe nice."
        }"##;
        let doc: TermsDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.version, "2.1");
        assert_eq!(
            doc.effective_date,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );
        assert!(doc.content_markdown.starts_with("# Terms"));
    }

    #[test]
    fn version_summary_parses_timestamptz() {
        let json = r#"{
            "id": "t2",
            "version": "1.0",
            "effective_date": "2025-01-01",
            "is_active": false,
            "created_at": "2024-12-15T09:30:00+00:00"
        }"#;
        let row: TermsVersionSummary = serde_json::from_str(json).unwrap();
        assert!(!row.is_active);
        assert_eq!(row.created_at.to_rfc3339(), "2024-12-15T09:30:00+00:00");
    }

    #[test]
    fn empty_id_is_rejected() {
        let json = r#"{
            "id": "",
            "version": "1.0",
            "effective_date": "2025-01-01",
            "content_markdown": ""
        }"#;
        assert!(serde_json::from_str::<TermsDocument>(json).is_err());
    }
}
