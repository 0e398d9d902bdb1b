use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::error::SourceError;
use crate::models::Contact;
use crate::services::source::ContactSource;

/// Contacts read from a JSON array on disk
///
/// The file is re-read on every query, so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct JsonFileContactSource {
    path: PathBuf,
}

impl JsonFileContactSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Read and parse a contacts file
///
/// The file must hold a JSON array. Rows that do not read as a contact are
/// logged and skipped.
pub async fn read_contacts_file(path: &Path) -> Result<Vec<Contact>, SourceError> {
    let raw = tokio::fs::read_to_string(path).await?;
    let rows: Vec<Value> = serde_json::from_str(&raw)?;
    let row_count = rows.len();

    let contacts: Vec<Contact> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<Contact>(row) {
            Ok(contact) => Some(contact),
            Err(e) => {
                tracing::warn!("Skipping unreadable contact at {}[{}]: {}", path.display(), index, e);
                None
            }
        })
        .collect();

    tracing::debug!(
        "Read {} of {} contacts from {}",
        contacts.len(),
        row_count,
        path.display()
    );

    Ok(contacts)
}

#[async_trait]
impl ContactSource for JsonFileContactSource {
    async fn list_all(&self) -> Result<Vec<Contact>, SourceError> {
        read_contacts_file(&self.path).await
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_contacts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":"A","x_coordinate":0.0,"y_coordinate":0.0,"gender":"male"}},
                {{"name":"B","x_coordinate":3.0,"y_coordinate":4.0}}]"#
        )
        .unwrap();

        let source = JsonFileContactSource::new(file.path());
        let contacts = source.list_all().await.unwrap();

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[1].gender, None);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = JsonFileContactSource::new("/nonexistent/contacts.json");
        assert!(matches!(source.list_all().await, Err(SourceError::Io(_))));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let source = JsonFileContactSource::new(file.path());
        assert!(matches!(source.list_all().await, Err(SourceError::Parse(_))));
    }

    #[tokio::test]
    async fn test_non_array_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name":"A"}}"#).unwrap();

        let source = JsonFileContactSource::new(file.path());
        assert!(matches!(source.list_all().await, Err(SourceError::Parse(_))));
    }

    #[tokio::test]
    async fn test_unreadable_rows_are_skipped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":"A","x_coordinate":0.0,"y_coordinate":0.0,"gender":"male"}},
                {{"name":"Typo","x_coordinate":"north","y_coordinate":1.0}},
                {{"name":"Alien","x_coordinate":1.0,"y_coordinate":1.0,"gender":"martian"}},
                {{"name":"B","x_coordinate":3.0,"y_coordinate":4.0}}]"#
        )
        .unwrap();

        let source = JsonFileContactSource::new(file.path());
        let contacts = source.list_all().await.unwrap();

        let names: Vec<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
