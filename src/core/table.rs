//! CSV table model for the table renderer.

use csv::ReaderBuilder;

use super::error::FetchError;
use crate::config::MAX_TABLE_ROWS;

/// Parsed CSV, capped for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CsvTable {
    /// Field names from the header row.
    pub headers: Vec<String>,
    /// At most `MAX_TABLE_ROWS` rows, each padded to the header width.
    pub rows: Vec<Vec<String>>,
    /// Number of data rows in the file.
    pub total_rows: usize,
}

impl CsvTable {
    /// Parse CSV text, keeping the first `MAX_TABLE_ROWS` rows.
    pub fn parse(text: &str) -> Result<Self, FetchError> {
        Self::parse_capped(text, MAX_TABLE_ROWS)
    }

    /// Parse CSV text, keeping the first `max_rows` rows.
    pub fn parse_capped(text: &str, max_rows: usize) -> Result<Self, FetchError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| FetchError::CsvParseError(e.to_string()))?
            .iter()
            .map(String::from)
            .collect();

        let mut rows = Vec::new();
        let mut total_rows = 0;
        for record in reader.records() {
            let record = record.map_err(|e| FetchError::CsvParseError(e.to_string()))?;
            total_rows += 1;
            if rows.len() < max_rows {
                let mut row: Vec<String> = record.iter().map(String::from).collect();
                if row.len() < headers.len() {
                    row.resize(headers.len(), String::new());
                }
                rows.push(row);
            }
        }

        Ok(Self {
            headers,
            rows,
            total_rows,
        })
    }

    /// Whether rows were dropped for display.
    pub fn is_truncated(&self) -> bool {
        self.total_rows > self.rows.len()
    }
}
