use extractors::{
    ingest_csv, ingest_file, ingest_vcf, partition, write_records, EmailRecord, ExtractionError,
};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn emails(records: &[EmailRecord]) -> BTreeSet<String> {
    records.iter().map(|r| r.email.clone()).collect()
}

#[test]
fn test_csv_file_with_names_and_noise() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "contacts.csv",
        b"First Name,Last Name,Email,Notes\n\
          Jane,Doe,jane.doe@company.com,\n\
          Spam,Bot,x___y@example.com,also jane.doe@company.com\n\
          ,,zzzzzzzzzz@example.com,\n",
    );

    let records = ingest_csv(&path).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0], EmailRecord::new("Jane", "Doe", "jane.doe@company.com"));

    let partitioned = partition(records);
    assert_eq!(emails(&partitioned.valid), BTreeSet::from(["jane.doe@company.com".to_string()]));
    assert_eq!(partitioned.suspicious.len(), 2);
}

#[test]
fn test_vcf_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "people.vcf",
        b"BEGIN:VCARD\nFN:John Doe\nEMAIL:john@example.com\nEND:VCARD\n",
    );

    let records = ingest_file(&path).unwrap();
    assert_eq!(records, vec![EmailRecord::new("John", "Doe", "john@example.com")]);
}

#[test]
fn test_invalid_utf8_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "latin1.csv",
        b"Name,Email\nJos\xe9,jose@example.com\n",
    );

    let records = ingest_csv(&path).unwrap();
    assert_eq!(emails(&records), BTreeSet::from(["jose@example.com".to_string()]));
}

#[test]
fn test_file_without_delimiters_or_addresses_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "notes.csv", b"nothing to see here\njust words\n");

    assert!(ingest_csv(&path).unwrap().is_empty());
}

#[test]
fn test_missing_file_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone.vcf");

    let err = ingest_vcf(&path).unwrap_err();
    assert!(matches!(err, ExtractionError::NotFound { .. }));
    assert!(err.to_string().contains("gone.vcf"));
}

#[test]
fn test_written_output_reingests_to_same_addresses() {
    let dir = tempfile::tempdir().unwrap();
    let records = vec![
        EmailRecord::new("Ada", "Lovelace", "ada@example.com"),
        EmailRecord::new("", "", "anon@example.org"),
        EmailRecord::new("Grace", "Hopper, RADM", "grace@example.net"),
    ];
    let path = dir.path().join("round_trip.csv");

    write_records(&path, &records).unwrap();
    let reread = ingest_csv(&path).unwrap();

    assert_eq!(emails(&reread), emails(&records));
    assert_eq!(reread, records);
}
