use serde::{Deserialize, Serialize};
use std::path::Path;
use ts_rs::TS;

/// Input formats the ingesters understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SourceFormat {
    Csv,
    Vcf,
}

impl SourceFormat {
    /// `.vcf` (any case) is a contact-card file; anything else is read as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("vcf") => SourceFormat::Vcf,
            _ => SourceFormat::Csv,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceFormat::Csv => "CSV",
            SourceFormat::Vcf => "VCF",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum FileStatus {
    Written,
    NoRecordsFound,
    Failed,
}

/// Outcome of processing one input file
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FileReport {
    pub input: String,
    pub format: SourceFormat,
    pub status: FileStatus,
    pub total: usize,
    pub valid: usize,
    pub suspicious: usize,
    pub valid_output: Option<String>,
    pub suspicious_output: Option<String>,
    pub error: Option<String>,
}

impl FileReport {
    pub fn new(input: &Path, format: SourceFormat) -> Self {
        Self {
            input: input.display().to_string(),
            format,
            status: FileStatus::NoRecordsFound,
            total: 0,
            valid: 0,
            suspicious: 0,
            valid_output: None,
            suspicious_output: None,
            error: None,
        }
    }

    pub fn failed(mut self, error: impl ToString) -> Self {
        self.status = FileStatus::Failed;
        self.error = Some(error.to_string());
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == FileStatus::Written
    }
}
