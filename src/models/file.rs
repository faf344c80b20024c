//! Released file types.

use serde::{Deserialize, Serialize};
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::core::error::FetchError;

/// A file approved for release, as listed by the files endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReleasedFile {
    /// Path-like name, may contain `/`.
    pub name: String,
    /// Name with the directory prefix shared by every listed file removed.
    /// Filled in by the loader.
    #[serde(default, rename = "shortName", alias = "short_name")]
    pub short_name: String,
    pub id: String,
    pub url: String,
    /// ISO-8601 release timestamp.
    pub date: String,
    pub sha256: String,
    /// Size in bytes.
    pub size: u64,
    #[serde(default, rename = "is_deleted", alias = "isDeleted")]
    pub is_deleted: bool,
}

impl ReleasedFile {
    /// Parsed release timestamp.
    ///
    /// Accepts any ISO-8601 date or date-time. Values without an offset are
    /// taken as UTC, and a bare date as midnight UTC.
    pub fn timestamp(&self) -> Option<OffsetDateTime> {
        let date = self.date.trim();
        OffsetDateTime::parse(date, &Rfc3339)
            .or_else(|_| OffsetDateTime::parse(date, &Iso8601::DEFAULT))
            .or_else(|_| PrimitiveDateTime::parse(date, &Iso8601::DEFAULT).map(|t| t.assume_utc()))
            .or_else(|_| Date::parse(date, &Iso8601::DEFAULT).map(|d| d.midnight().assume_utc()))
            .ok()
    }

    /// Name shown in the list.
    pub fn display_name(&self) -> &str {
        if self.short_name.is_empty() {
            &self.name
        } else {
            &self.short_name
        }
    }
}

/// Body of the files endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct FileListResponse {
    pub files: Vec<ReleasedFile>,
}

/// State of the file list.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FileListResult {
    #[default]
    Loading,
    Loaded(Vec<ReleasedFile>),
    Failed(FetchError),
}

impl FileListResult {
    /// Loaded files, empty while loading or after a failure.
    pub fn files(&self) -> &[ReleasedFile] {
        match self {
            Self::Loaded(files) => files,
            _ => &[],
        }
    }
}

/// File list ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending by name, case-insensitive.
    #[default]
    Name,
    /// Descending by release date, newest first.
    Newest,
}

impl SortOrder {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Newest => "Newest",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_deserialize_file() {
        let json = r#"{
            "name": "output/summary.csv",
            "id": "f1",
            "url": "/files/f1",
            "date": "2024-03-01T10:20:30Z",
            "sha256": "abc",
            "size": 42,
            "is_deleted": true,
            "metadata": {"ignored": true}
        }"#;
        let file: ReleasedFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.name, "output/summary.csv");
        assert_eq!(file.size, 42);
        assert!(file.is_deleted);
        assert!(file.short_name.is_empty());
        assert_eq!(file.display_name(), "output/summary.csv");
        assert_eq!(file.timestamp().map(|t| t.year()), Some(2024));
    }

    #[test]
    fn test_deleted_defaults_false() {
        let json = r#"{"name":"a","id":"1","url":"u","date":"d","sha256":"s","size":0}"#;
        let file: ReleasedFile = serde_json::from_str(json).unwrap();
        assert!(!file.is_deleted);
        assert_eq!(file.timestamp(), None);
    }

    #[test]
    fn test_timestamp_without_offset() {
        let mut file: ReleasedFile = serde_json::from_str(
            r#"{"name":"a","id":"1","url":"u","date":"2025-06-01T12:30:00","sha256":"s","size":0}"#,
        )
        .unwrap();
        assert_eq!(file.timestamp(), Some(datetime!(2025-06-01 12:30 UTC)));

        file.date = "2025-07-01".to_string();
        assert_eq!(file.timestamp(), Some(datetime!(2025-07-01 00:00 UTC)));

        file.date = "2025-07-01T08:00:00+02:00".to_string();
        assert_eq!(file.timestamp(), Some(datetime!(2025-07-01 06:00 UTC)));
    }

    #[test]
    fn test_files_accessor() {
        assert!(FileListResult::Loading.files().is_empty());
        assert!(FileListResult::Failed(FetchError::Timeout).files().is_empty());
    }
}
