use crate::suspicion::is_suspicious;
use shared_types::{EmailRecord, PartitionedRecords};

/// Split records into valid and suspicious halves, keeping their order.
pub fn partition(records: Vec<EmailRecord>) -> PartitionedRecords {
    let (suspicious, valid): (Vec<EmailRecord>, Vec<EmailRecord>) = records
        .into_iter()
        .partition(|record| is_suspicious(&record.email));

    PartitionedRecords { valid, suspicious }
}
