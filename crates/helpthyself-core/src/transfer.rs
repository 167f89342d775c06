//! JSON export and import of the whole document.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{ImportError, Result};
use crate::model::{parse_document, Document};
use crate::streak::today;

/// `help-thy-self-data-YYYY-MM-DD.json`
pub fn export_file_name(day: NaiveDate) -> String {
    format!("help-thy-self-data-{}.json", day.format("%Y-%m-%d"))
}

/// Pretty-printed JSON of the full document.
pub fn export_json(doc: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Write an export into `dir`, named for today's local date.
pub fn export_to_dir(doc: &Document, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_file_name(today()));
    std::fs::write(&path, export_json(doc)?)?;
    Ok(path)
}

/// Parse and migrate an import. Any subset of the document is accepted.
pub fn import_json(text: &str) -> Result<Document, ImportError> {
    parse_document(text).map_err(ImportError::Malformed)
}

pub fn import_file(path: &Path) -> Result<Document, ImportError> {
    let text = std::fs::read_to_string(path).map_err(|source| ImportError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    import_json(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_state;

    #[test]
    fn file_name_uses_date() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        assert_eq!(export_file_name(day), "help-thy-self-data-2025-01-07.json");
    }

    #[test]
    fn export_then_import_is_identity() {
        let mut doc = default_state();
        doc.affirmations.favorites.push("Still here.".into());
        let text = export_json(&doc).unwrap();
        assert_eq!(import_json(&text).unwrap(), doc);
    }

    #[test]
    fn import_rejects_non_json() {
        assert!(matches!(import_json("<html>"), Err(ImportError::Malformed(_))));
    }

    #[test]
    fn import_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = import_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ImportError::Unreadable { .. }));
    }

    #[test]
    fn export_to_dir_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let doc = default_state();
        let path = export_to_dir(&doc, dir.path()).unwrap();
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("help-thy-self-data-"));
        assert_eq!(import_file(&path).unwrap(), doc);
    }
}
