//! Document assembly and plain-text export
//!
//! Generation is a snapshot of the form values plus a type tag and a
//! timestamp. Export joins the snapshot into a flat text document and
//! writes it to the export directory. The requested format is a label
//! only: every format currently produces the same plain-text artifact.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Snapshot of user-entered values, in template field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value. Keys stay in first-insertion order.
    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<String>) {
        let id = id.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == id) {
            entry.1 = value;
        } else {
            self.entries.push((id, value));
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Requested output flavour, used for user-facing messaging only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Docx,
    Pdf,
}

impl ExportFormat {
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Docx => "DOCX",
            ExportFormat::Pdf => "PDF",
        }
    }
}

/// Failures while saving the artifact
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create export directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write document to {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The FormData snapshot plus type tag and timestamp, produced at
/// submission or export time. Never persisted between sessions.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedDocument {
    pub doc_type: String,
    pub data: FormData,
    pub created_at: DateTime<Utc>,
}

impl GeneratedDocument {
    pub fn new(doc_type: impl Into<String>, data: FormData) -> Self {
        Self {
            doc_type: doc_type.into(),
            data,
            created_at: Utc::now(),
        }
    }

    /// Document heading: the type tag with hyphens opened up, uppercased
    pub fn heading(&self) -> String {
        self.doc_type.replace('-', " ").to_uppercase()
    }

    /// Render the flat text artifact: heading, blank line, then one
    /// `key: value` line per entry, in field order
    pub fn render_text(&self) -> String {
        let mut content = format!("{}\n\n", self.heading());
        for (key, value) in self.data.entries() {
            content.push_str(key);
            content.push_str(": ");
            content.push_str(value);
            content.push('\n');
        }
        content
    }

    /// Write the artifact into `dir` as `<file_stem>.txt`.
    ///
    /// The extension stays `.txt` whichever format tag was requested; the
    /// tag never selects an encoder.
    pub fn export(
        &self,
        dir: &Path,
        file_stem: &str,
        _format: ExportFormat,
    ) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(format!("{file_stem}.txt"));
        std::fs::write(&path, self.render_text()).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complaint_data() -> FormData {
        let mut data = FormData::new();
        data.insert("senderName", "Ada Lovelace");
        data.insert("senderAddress", "12 Analytical Row");
        data.insert("recipientName", "Acme Corp");
        data.insert("recipientAddress", "1 Factory Lane");
        data.insert("subject", "Defective engine");
        data.insert("complaintDetails", "The difference engine jams daily.");
        data.insert("desiredResolution", "Full refund");
        data
    }

    mod form_data {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_insert_preserves_order() {
            let data = complaint_data();
            let keys: Vec<_> = data.entries().iter().map(|(k, _)| k.as_str()).collect();
            assert_eq!(keys[0], "senderName");
            assert_eq!(keys[6], "desiredResolution");
        }

        #[test]
        fn test_insert_replaces_existing_key() {
            let mut data = FormData::new();
            data.insert("subject", "first");
            data.insert("subject", "second");
            assert_eq!(data.len(), 1);
            assert_eq!(data.get("subject"), Some("second"));
        }

        #[test]
        fn test_get_missing_key() {
            let data = FormData::new();
            assert_eq!(data.get("anything"), None);
            assert!(data.is_empty());
        }
    }

    mod rendering {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_heading_from_type_tag() {
            let doc = GeneratedDocument::new("rental-agreement", FormData::new());
            assert_eq!(doc.heading(), "RENTAL AGREEMENT");
        }

        #[test]
        fn test_render_contains_every_pair() {
            let data = complaint_data();
            let doc = GeneratedDocument::new("complaint-letter", data.clone());
            let text = doc.render_text();

            assert!(text.starts_with("COMPLAINT LETTER\n\n"));
            for (key, value) in data.entries() {
                assert!(text.contains(&format!("{key}: {value}")), "missing {key}");
            }
        }

        #[test]
        fn test_render_includes_empty_values() {
            let mut data = FormData::new();
            data.insert("effectiveDate", "2024-01-01");
            data.insert("expirationDate", "");
            let doc = GeneratedDocument::new("power-of-attorney", data);
            assert!(doc.render_text().contains("expirationDate: \n"));
        }

        #[test]
        fn test_complaint_letter_literal_substrings() {
            let doc = GeneratedDocument::new("complaint-letter", complaint_data());
            let text = doc.render_text();
            assert!(text.contains("senderName: Ada Lovelace"));
            assert!(text.contains("complaintDetails: The difference engine jams daily."));
        }
    }

    mod export {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_export_writes_txt_regardless_of_format() {
            let dir = tempfile::tempdir().unwrap();
            let doc = GeneratedDocument::new("rental-agreement", complaint_data());

            let docx_path = doc
                .export(dir.path(), "Rental-Agreement", ExportFormat::Docx)
                .unwrap();
            let pdf_path = doc
                .export(dir.path(), "Rental-Agreement", ExportFormat::Pdf)
                .unwrap();

            assert_eq!(docx_path.file_name().unwrap(), "Rental-Agreement.txt");
            assert_eq!(docx_path, pdf_path);
        }

        #[test]
        fn test_export_round_trips_content() {
            let dir = tempfile::tempdir().unwrap();
            let doc = GeneratedDocument::new("complaint-letter", complaint_data());
            let path = doc
                .export(dir.path(), "Complaint-Letter", ExportFormat::Pdf)
                .unwrap();

            let written = std::fs::read_to_string(path).unwrap();
            assert_eq!(written, doc.render_text());
        }

        #[test]
        fn test_export_creates_missing_directory() {
            let dir = tempfile::tempdir().unwrap();
            let nested = dir.path().join("documents").join("legal");
            let doc = GeneratedDocument::new("rental-agreement", FormData::new());
            let path = doc
                .export(&nested, "Rental-Agreement", ExportFormat::Docx)
                .unwrap();
            assert!(path.exists());
        }

        #[test]
        fn test_export_error_on_unwritable_target() {
            let dir = tempfile::tempdir().unwrap();
            // A regular file where the export directory should be
            let blocker = dir.path().join("not-a-dir");
            std::fs::write(&blocker, "occupied").unwrap();

            let doc = GeneratedDocument::new("rental-agreement", FormData::new());
            let err = doc
                .export(&blocker, "Rental-Agreement", ExportFormat::Docx)
                .unwrap_err();
            assert!(matches!(
                err,
                ExportError::CreateDir { .. } | ExportError::Write { .. }
            ));
        }
    }

    #[test]
    fn test_format_labels() {
        assert_eq!(ExportFormat::Docx.label(), "DOCX");
        assert_eq!(ExportFormat::Pdf.label(), "PDF");
        assert_eq!(ExportFormat::default(), ExportFormat::Docx);
    }
}
