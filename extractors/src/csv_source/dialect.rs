//! Delimiter detection for loosely formatted CSV exports.

const SAMPLE_CHARS: usize = 1024;

/// Order in which a consistent sniffed delimiter is preferred.
const SNIFF_PREFERENCE: [u8; 4] = [b',', b'\t', b';', b'|'];

/// Candidates for the frequency fallback; ties go to the earlier entry.
const FALLBACK_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Delimited(u8),
    /// No delimiter anywhere: the file is scanned as one block of text.
    FreeText,
}

pub fn detect_layout(content: &str) -> Layout {
    let (sample, truncated) = sample_of(content);

    if sample.trim().is_empty() {
        return Layout::Delimited(b',');
    }

    if let Some(delimiter) = sniff_delimiter(sample, truncated) {
        return Layout::Delimited(delimiter);
    }

    match most_frequent_delimiter(content) {
        Some(delimiter) => Layout::Delimited(delimiter),
        None => Layout::FreeText,
    }
}

fn sample_of(content: &str) -> (&str, bool) {
    match content.char_indices().nth(SAMPLE_CHARS) {
        Some((end, _)) => (&content[..end], true),
        None => (content, false),
    }
}

/// Pick the delimiter that splits every record of the sample into the same
/// number of fields. `truncated` means the sample was cut from a longer text,
/// so its last record is probably incomplete and gets ignored.
pub fn sniff_delimiter(sample: &str, truncated: bool) -> Option<u8> {
    let mut records = split_records(sample);
    if truncated && records.len() > 1 {
        records.pop();
    }
    records.retain(|record| !record.trim().is_empty());

    let first = *records.first()?;

    SNIFF_PREFERENCE.into_iter().find(|&delimiter| {
        let expected = count_unquoted(first, delimiter);
        expected > 0
            && records
                .iter()
                .all(|record| count_unquoted(record, delimiter) == expected)
    })
}

/// Raw counting over the whole content, quotes ignored.
pub fn most_frequent_delimiter(content: &str) -> Option<u8> {
    let mut best: Option<(u8, usize)> = None;

    for delimiter in FALLBACK_CANDIDATES {
        let count = content.bytes().filter(|&b| b == delimiter).count();
        if count > 0 && best.map_or(true, |(_, most)| count > most) {
            best = Some((delimiter, count));
        }
    }

    best.map(|(delimiter, _)| delimiter)
}

fn split_records(sample: &str) -> Vec<&str> {
    let mut records = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in sample.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '\n' if !in_quotes => {
                records.push(sample[start..i].trim_end_matches('\r'));
                start = i + 1;
            }
            _ => {}
        }
    }

    if start < sample.len() {
        records.push(&sample[start..]);
    }

    records
}

fn count_unquoted(record: &str, delimiter: u8) -> usize {
    let delimiter = delimiter as char;
    let mut in_quotes = false;
    let mut count = 0;

    for c in record.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == delimiter && !in_quotes {
            count += 1;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistent_comma_layout() {
        let content = "Name,Email\nAlice,alice@example.com\nBob,bob@example.com\n";
        assert_eq!(detect_layout(content), Layout::Delimited(b','));
    }

    #[test]
    fn test_semicolon_with_commas_inside_quotes() {
        let content = "Name;Email\n\"Doe, Jane\";jane@example.com\n\"Roe, Rick\";rick@example.com\n";
        assert_eq!(detect_layout(content), Layout::Delimited(b';'));
    }

    #[test]
    fn test_tab_and_pipe_layouts() {
        assert_eq!(
            detect_layout("a\tb\tc\n1\t2\t3\n"),
            Layout::Delimited(b'\t')
        );
        assert_eq!(detect_layout("a|b\n1|2\n"), Layout::Delimited(b'|'));
    }

    #[test]
    fn test_inconsistent_rows_fall_back_to_frequency() {
        // Comma counts differ per row, so sniffing gives up
        let content = "a;b;c\nx,y;z\nq;r\n";
        assert_eq!(sniff_delimiter(content, false), None);
        assert_eq!(detect_layout(content), Layout::Delimited(b';'));
    }

    #[test]
    fn test_fallback_tie_prefers_comma() {
        assert_eq!(most_frequent_delimiter("a,b;c"), Some(b','));
        assert_eq!(most_frequent_delimiter("a|b\tc|d\te"), Some(b'\t'));
    }

    #[test]
    fn test_no_delimiter_is_free_text() {
        let content = "Reach me at someone@example.com\nor other@example.org\n";
        assert_eq!(detect_layout(content), Layout::FreeText);
    }

    #[test]
    fn test_blank_content_defaults_to_comma() {
        assert_eq!(detect_layout(""), Layout::Delimited(b','));
        assert_eq!(detect_layout("  \n\n "), Layout::Delimited(b','));
    }

    #[test]
    fn test_truncated_last_record_ignored() {
        let mut content = String::new();
        for i in 0..200 {
            content.push_str(&format!("name{i};user{i}@example.com\n"));
        }
        // The cut lands mid-record; the partial tail must not break sniffing
        content.insert_str(0, "Name;Email\n");
        assert_eq!(detect_layout(&content), Layout::Delimited(b';'));
    }

    #[test]
    fn test_quoted_newline_does_not_split_record() {
        let sample = "a,b\n\"multi\nline\",c\n";
        assert_eq!(split_records(sample), vec!["a,b", "\"multi\nline\",c"]);
    }
}
