use shared_types::{EmailRecord, ExtractionError};
use std::io;
use std::path::Path;

pub const OUTPUT_HEADER: [&str; 3] = ["First Name", "Last Name", "Email"];

/// Write records as a three-column CSV, replacing any existing file.
pub fn write_records(path: &Path, records: &[EmailRecord]) -> Result<(), ExtractionError> {
    let write_error = |source: io::Error| ExtractionError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(|e| write_error(e.into()))?;

    writer
        .write_record(OUTPUT_HEADER)
        .map_err(|e| write_error(e.into()))?;

    for record in records {
        writer
            .write_record([&record.first_name, &record.last_name, &record.email])
            .map_err(|e| write_error(e.into()))?;
    }

    writer.flush().map_err(write_error)?;

    Ok(())
}
