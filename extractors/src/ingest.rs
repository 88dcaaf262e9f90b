use crate::csv_source::CsvIngester;
use crate::source_reader::read_source;
use crate::vcard::VcfIngester;
use shared_types::{EmailRecord, ExtractionError, RecordSource, SourceFormat};
use std::path::Path;

/// Read `path` and run it through `source`.
pub fn ingest_with(
    source: &dyn RecordSource,
    path: &Path,
) -> Result<Vec<EmailRecord>, ExtractionError> {
    tracing::info!("Reading {} file: {}", source.format().label(), path.display());

    let content = read_source(path)?;
    let records = source.parse(&content);

    tracing::debug!(records = records.len(), "Finished {}", path.display());
    Ok(records)
}

pub fn ingest_csv(path: impl AsRef<Path>) -> Result<Vec<EmailRecord>, ExtractionError> {
    ingest_with(&CsvIngester::new(), path.as_ref())
}

pub fn ingest_vcf(path: impl AsRef<Path>) -> Result<Vec<EmailRecord>, ExtractionError> {
    ingest_with(&VcfIngester::new(), path.as_ref())
}

/// Ingest `path` with the reader its extension calls for.
pub fn ingest_file(path: impl AsRef<Path>) -> Result<Vec<EmailRecord>, ExtractionError> {
    let path = path.as_ref();
    match SourceFormat::from_path(path) {
        SourceFormat::Csv => ingest_csv(path),
        SourceFormat::Vcf => ingest_vcf(path),
    }
}
