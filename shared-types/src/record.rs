use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One contact row of the output: an address plus whatever name was found next to it.
///
/// `email` is the identity of the record and is kept exactly as discovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmailRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl EmailRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Fill name fields that are still empty. A field that already holds a
    /// value is never replaced.
    pub fn merge_names(&mut self, first_name: &str, last_name: &str) {
        if self.first_name.is_empty() && !first_name.is_empty() {
            self.first_name = first_name.to_string();
        }
        if self.last_name.is_empty() && !last_name.is_empty() {
            self.last_name = last_name.to_string();
        }
    }
}

/// Records split by the suspicion classifier, both halves in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PartitionedRecords {
    pub valid: Vec<EmailRecord>,
    pub suspicious: Vec<EmailRecord>,
}

impl PartitionedRecords {
    /// Everything lands in `valid`; used when suspicious filtering is turned off.
    pub fn unfiltered(records: Vec<EmailRecord>) -> Self {
        Self {
            valid: records,
            suspicious: Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.valid.len() + self.suspicious.len()
    }

    pub fn into_parts(self) -> (Vec<EmailRecord>, Vec<EmailRecord>) {
        (self.valid, self.suspicious)
    }
}
