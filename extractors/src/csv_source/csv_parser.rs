use csv::ReaderBuilder;

/// Splits CSV text into raw rows. No header handling and no fixed row width:
/// every physical record comes back as its list of cells, and a blank line
/// comes back as an empty row so row positions line up with the file.
pub struct CsvParser {
    delimiter: u8,
}

impl CsvParser {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn parse_rows(&self, content: &str) -> Vec<Vec<String>> {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true);

        let mut rows = Vec::new();

        for (index, record) in self.split_records(content).into_iter().enumerate() {
            if record.is_empty() {
                rows.push(Vec::new());
                continue;
            }

            match builder.from_reader(record.as_bytes()).records().next() {
                Some(Ok(cells)) => rows.push(cells.iter().map(str::to_string).collect()),
                Some(Err(e)) => {
                    tracing::warn!(row = index, "Failed to parse CSV row: {}", e);
                }
                None => rows.push(Vec::new()),
            }
        }

        rows
    }

    /// Cut the text at line ends that are not inside a quoted field. A quote
    /// only opens a field when it is the field's first character, and `""`
    /// inside a quoted field is an escaped quote.
    fn split_records<'a>(&self, content: &'a str) -> Vec<&'a str> {
        let delimiter = self.delimiter as char;
        let mut records = Vec::new();
        let mut start = 0;
        let mut in_quotes = false;
        let mut just_closed = false;
        let mut at_field_start = true;

        for (i, c) in content.char_indices() {
            if in_quotes {
                if c == '"' {
                    in_quotes = false;
                    just_closed = true;
                }
                continue;
            }

            if c == '"' && (at_field_start || just_closed) {
                in_quotes = true;
                just_closed = false;
                at_field_start = false;
                continue;
            }
            just_closed = false;

            match c {
                '\n' => {
                    records.push(content[start..i].trim_end_matches('\r'));
                    start = i + 1;
                    at_field_start = true;
                }
                c if c == delimiter => at_field_start = true,
                _ => at_field_start = false,
            }
        }

        if start < content.len() {
            records.push(content[start..].trim_end_matches('\r'));
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_delimiters_stay_in_cell() {
        let rows = CsvParser::new(b',').parse_rows("Name,Email\n\"Doe, Jane\",\"a@x.com, b@x.com\"\n");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["Doe, Jane", "a@x.com, b@x.com"]);
    }

    #[test]
    fn test_ragged_rows_are_kept() {
        let rows = CsvParser::new(b';').parse_rows("a;b;c\nd\ne;f\n");

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["d"]);
        assert_eq!(rows[2], vec!["e", "f"]);
    }

    #[test]
    fn test_tab_delimiter() {
        let rows = CsvParser::new(b'\t').parse_rows("First Name\tEmail\r\nAda\tada@example.com\r\n");
        assert_eq!(rows[1], vec!["Ada", "ada@example.com"]);
    }

    #[test]
    fn test_empty_content_has_no_rows() {
        assert!(CsvParser::new(b',').parse_rows("").is_empty());
    }

    #[test]
    fn test_blank_lines_become_empty_rows() {
        let rows = CsvParser::new(b',').parse_rows("\n\r\nName,Email\n\nAda,ada@example.com\n");

        assert_eq!(rows.len(), 5);
        assert!(rows[0].is_empty());
        assert!(rows[1].is_empty());
        assert_eq!(rows[2], vec!["Name", "Email"]);
        assert!(rows[3].is_empty());
        assert_eq!(rows[4], vec!["Ada", "ada@example.com"]);
    }

    #[test]
    fn test_quoted_newline_and_escaped_quotes_stay_in_one_row() {
        let content = "a,\"line one\n\nline \"\"two\"\"\",b\nnext,row\n";
        let rows = CsvParser::new(b',').parse_rows(content);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["a", "line one\n\nline \"two\"", "b"]);
        assert_eq!(rows[1], vec!["next", "row"]);
    }

    #[test]
    fn test_quote_inside_unquoted_field_is_literal() {
        let rows = CsvParser::new(b',').parse_rows("tv,5\" screen\nnext,row\n");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["tv", "5\" screen"]);
    }
}
