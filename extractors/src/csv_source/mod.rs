mod csv_parser;
mod dialect;
mod header;

pub use csv_parser::CsvParser;
pub use dialect::{detect_layout, most_frequent_delimiter, sniff_delimiter, Layout};
pub use header::RowContext;

use crate::email_scan::extract_emails;
use crate::record_store::RecordStore;
use shared_types::{EmailRecord, RecordSource, SourceFormat};
use std::collections::HashSet;

/// Pulls addresses, and names where a header says where they are, out of CSV text.
pub struct CsvIngester;

impl CsvIngester {
    pub fn new() -> Self {
        Self
    }

    fn collect_free_text(&self, content: &str, store: &mut RecordStore) {
        for email in extract_emails(content) {
            store.insert_or_merge("", "", &email);
        }
    }

    fn collect_rows(&self, rows: &[Vec<String>], store: &mut RecordStore) {
        let context = RowContext::detect(rows);
        tracing::debug!(
            header_row = ?context.header_row,
            first_name_column = ?context.first_name_column,
            last_name_column = ?context.last_name_column,
            email_columns = ?context.email_columns,
            "Detected CSV columns"
        );

        for row in rows.iter().skip(context.first_data_row()) {
            let (first_name, last_name) = context.names_in(row);

            let mut found = HashSet::new();

            for &column in &context.email_columns {
                if let Some(cell) = row.get(column).filter(|cell| !cell.trim().is_empty()) {
                    found.extend(extract_emails(cell));
                }
            }

            // Addresses also turn up outside the labelled columns
            for cell in row.iter().filter(|cell| !cell.trim().is_empty()) {
                found.extend(extract_emails(cell));
            }

            for email in &found {
                store.insert_or_merge(first_name, last_name, email);
            }
        }
    }
}

impl Default for CsvIngester {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for CsvIngester {
    fn parse(&self, content: &str) -> Vec<EmailRecord> {
        let mut store = RecordStore::new();

        match detect_layout(content) {
            Layout::FreeText => {
                tracing::debug!("No delimiter found, scanning content as plain text");
                self.collect_free_text(content, &mut store);
            }
            Layout::Delimited(delimiter) => {
                tracing::debug!(delimiter = %(delimiter as char).escape_default(), "Parsing CSV rows");
                let rows = CsvParser::new(delimiter).parse_rows(content);
                self.collect_rows(&rows, &mut store);
            }
        }

        store.into_sorted()
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Csv
    }
}
