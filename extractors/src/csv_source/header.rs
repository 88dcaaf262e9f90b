use std::collections::BTreeSet;

/// How many leading rows may hold column labels.
const HEADER_SCAN_ROWS: usize = 5;

/// Column layout of one CSV file, fixed for all of its data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowContext {
    pub first_name_column: Option<usize>,
    pub last_name_column: Option<usize>,
    pub email_columns: BTreeSet<usize>,
    pub header_row: Option<usize>,
}

impl RowContext {
    /// Scan the first rows for name and email labels.
    ///
    /// Each signal keeps the first row (and left-most cell) where it fires.
    /// The header row is the earliest row where any signal fired.
    pub fn detect(rows: &[Vec<String>]) -> Self {
        let mut context = Self::default();

        for (row_index, row) in rows.iter().take(HEADER_SCAN_ROWS).enumerate() {
            let cells: Vec<String> = row.iter().map(|cell| cell.to_lowercase().trim().to_string()).collect();

            if context.first_name_column.is_none() {
                if let Some(column) = cells.iter().position(|cell| is_first_name_label(cell)) {
                    context.first_name_column = Some(column);
                    context.mark_header(row_index);
                }
            }

            if context.last_name_column.is_none() {
                if let Some(column) = cells.iter().position(|cell| is_last_name_label(cell)) {
                    context.last_name_column = Some(column);
                    context.mark_header(row_index);
                }
            }

            for (column, cell) in cells.iter().enumerate() {
                if is_email_label(cell) && context.email_columns.insert(column) {
                    context.mark_header(row_index);
                }
            }
        }

        context
    }

    fn mark_header(&mut self, row_index: usize) {
        // Rows are visited in order, so the first mark is the minimum
        self.header_row.get_or_insert(row_index);
    }

    pub fn first_data_row(&self) -> usize {
        self.header_row.map_or(0, |row| row + 1)
    }

    /// First and last name of a data row; empty where the column is unknown or missing.
    pub fn names_in<'a>(&self, row: &'a [String]) -> (&'a str, &'a str) {
        (
            cell_at(row, self.first_name_column),
            cell_at(row, self.last_name_column),
        )
    }
}

fn cell_at(row: &[String], column: Option<usize>) -> &str {
    column
        .and_then(|column| row.get(column))
        .map(|cell| cell.trim())
        .unwrap_or("")
}

fn is_first_name_label(cell: &str) -> bool {
    cell.contains("first") && cell.contains("name")
}

fn is_last_name_label(cell: &str) -> bool {
    cell.contains("last") && cell.contains("name")
}

fn is_email_label(cell: &str) -> bool {
    cell.contains("email") || cell.contains("e-mail") || cell.contains("mail")
}
