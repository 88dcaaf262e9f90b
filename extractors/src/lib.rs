//! Extractors Crate
//!
//! Pulls email addresses, plus whatever first/last names sit next to them,
//! out of CSV exports and vCard files, and separates likely-generated
//! addresses from real contacts.
//!
//! # Architecture
//!
//! - **Types**: records, reports and errors live in the `shared-types` crate
//! - **Ingesters**: `CsvIngester` and `VcfIngester` implement `RecordSource`
//! - **Classification**: `is_suspicious` and `partition` run after ingestion
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::{ingest_csv, partition, write_records};
//!
//! let records = ingest_csv("contacts.csv")?;
//! let partitioned = partition(records);
//! write_records(Path::new("contacts_emails.csv"), &partitioned.valid)?;
//! ```

pub mod csv_source;
pub mod email_scan;
pub mod ingest;
pub mod output;
pub mod partition;
pub mod record_store;
pub mod source_reader;
pub mod suspicion;
pub mod vcard;

// Re-export commonly used types
pub use csv_source::CsvIngester;
pub use email_scan::{extract_emails, is_email_shaped};
pub use ingest::{ingest_csv, ingest_file, ingest_vcf, ingest_with};
pub use output::{write_records, OUTPUT_HEADER};
pub use partition::partition;
pub use record_store::RecordStore;
pub use source_reader::{decode_permissive, read_source};
pub use suspicion::{first_matching_rule, is_suspicious, SuspicionRule};
pub use vcard::VcfIngester;

// Re-export the shared types for convenience
pub use shared_types::{EmailRecord, ExtractionError, PartitionedRecords, RecordSource, SourceFormat};
