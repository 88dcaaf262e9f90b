pub mod extraction;
pub mod record;
pub mod report;

pub use extraction::{ExtractionError, RecordSource};
pub use record::{EmailRecord, PartitionedRecords};
pub use report::{FileReport, FileStatus, SourceFormat};
