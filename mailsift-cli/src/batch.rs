use anyhow::{bail, Context, Result};
use extractors::{first_matching_rule, ingest_file, partition, write_records};
use shared_types::{ExtractionError, FileReport, FileStatus, PartitionedRecords, SourceFormat};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::build_output_paths;

#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    pub output_file: Option<PathBuf>,
    pub output_folder: Option<PathBuf>,
    pub filter_suspicious: bool,
}

/// Ingest, classify and write one input file. Failures are reported, never raised.
pub fn process_file(input: &Path, options: &ProcessOptions) -> FileReport {
    let format = SourceFormat::from_path(input);
    let report = FileReport::new(input, format);

    match write_outputs(input, format, options, report.clone()) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Error processing '{}': {}", input.display(), e);
            report.failed(e)
        }
    }
}

fn write_outputs(
    input: &Path,
    format: SourceFormat,
    options: &ProcessOptions,
    mut report: FileReport,
) -> Result<FileReport, ExtractionError> {
    let records = ingest_file(input)?;

    if records.is_empty() {
        tracing::info!("No email addresses found in '{}'.", input.display());
        report.status = FileStatus::NoRecordsFound;
        return Ok(report);
    }

    let partitioned = if options.filter_suspicious {
        let partitioned = partition(records);
        tracing::info!(
            "Found {} total email(s): {} valid, {} suspicious",
            partitioned.total(),
            partitioned.valid.len(),
            partitioned.suspicious.len()
        );
        for record in &partitioned.suspicious {
            if let Some(rule) = first_matching_rule(&record.email) {
                tracing::debug!(rule = %rule, "Flagged {}", record.email);
            }
        }
        partitioned
    } else {
        tracing::info!("Found {} unique email address(es)", records.len());
        PartitionedRecords::unfiltered(records)
    };

    if let Some(folder) = &options.output_folder {
        fs::create_dir_all(folder).map_err(|source| ExtractionError::WriteError {
            path: folder.clone(),
            source,
        })?;
    }

    let paths = build_output_paths(
        input,
        format,
        options.output_file.as_deref(),
        options.output_folder.as_deref(),
    );

    write_records(&paths.valid, &partitioned.valid)?;
    tracing::info!(
        "Successfully wrote {} email record(s) to '{}'",
        partitioned.valid.len(),
        paths.valid.display()
    );
    report.valid_output = Some(paths.valid.display().to_string());

    if !partitioned.suspicious.is_empty() {
        write_records(&paths.suspicious, &partitioned.suspicious)?;
        tracing::info!("Suspicious emails saved to: {}", paths.suspicious.display());
        report.suspicious_output = Some(paths.suspicious.display().to_string());
    }

    report.status = FileStatus::Written;
    report.total = partitioned.total();
    report.valid = partitioned.valid.len();
    report.suspicious = partitioned.suspicious.len();

    Ok(report)
}

/// Files in `folder` (not recursive) with the given extension, sorted.
pub fn list_sources(folder: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&folder.to_string_lossy()),
        extension
    );

    let mut paths = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("Invalid folder pattern {}", pattern))? {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(_) => {}
            Err(e) => tracing::warn!("Skipping unreadable entry: {}", e),
        }
    }

    paths.sort();
    Ok(paths)
}

/// Process every CSV file, then every VCF file, of `folder` into `output_folder`.
pub fn process_folder(
    folder: &Path,
    output_folder: &Path,
    filter_suspicious: bool,
) -> Result<Vec<FileReport>> {
    if !folder.is_dir() {
        bail!(
            "Folder '{}' not found or is not a directory.",
            folder.display()
        );
    }

    let csv_files = list_sources(folder, "csv")?;
    let vcf_files = list_sources(folder, "vcf")?;

    if csv_files.is_empty() && vcf_files.is_empty() {
        tracing::info!("No CSV or VCF files found in '{}'.", folder.display());
        return Ok(Vec::new());
    }

    fs::create_dir_all(output_folder).with_context(|| {
        format!("Failed to create output folder {}", output_folder.display())
    })?;

    tracing::info!(
        "Found {} CSV file(s) and {} VCF file(s) in '{}'",
        csv_files.len(),
        vcf_files.len(),
        folder.display()
    );
    tracing::info!("Output folder: {}", output_folder.display());

    let options = ProcessOptions {
        output_file: None,
        output_folder: Some(output_folder.to_path_buf()),
        filter_suspicious,
    };

    let reports: Vec<FileReport> = csv_files
        .iter()
        .chain(vcf_files.iter())
        .map(|path| process_file(path, &options))
        .collect();

    let processed = reports.iter().filter(|report| report.is_success()).count();
    tracing::info!(
        "Processed {} out of {} file(s) successfully.",
        processed,
        reports.len()
    );

    Ok(reports)
}
