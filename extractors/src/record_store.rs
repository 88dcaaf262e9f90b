use shared_types::EmailRecord;
use std::collections::HashMap;

/// Deduplicating collection of records keyed by address.
///
/// The first sighting of an address creates its record. Later sightings can
/// only fill name fields that are still empty.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: HashMap<String, EmailRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_or_merge(&mut self, first_name: &str, last_name: &str, email: &str) {
        match self.records.get_mut(email) {
            Some(existing) => existing.merge_names(first_name, last_name),
            None => {
                self.records.insert(
                    email.to_string(),
                    EmailRecord::new(first_name, last_name, email),
                );
            }
        }
    }

    pub fn get(&self, email: &str) -> Option<&EmailRecord> {
        self.records.get(email)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drain the store into a list ordered by address.
    pub fn into_sorted(self) -> Vec<EmailRecord> {
        let mut records: Vec<EmailRecord> = self.records.into_values().collect();
        records.sort_by(|a, b| a.email.cmp(&b.email));
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_record_per_address() {
        let mut store = RecordStore::new();
        store.insert_or_merge("Alice", "Smith", "alice@example.com");
        store.insert_or_merge("Alicia", "", "alice@example.com");
        store.insert_or_merge("", "", "bob@example.com");

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_names_never_overwritten_once_set() {
        let mut store = RecordStore::new();
        store.insert_or_merge("", "Smith", "alice@example.com");
        store.insert_or_merge("Alice", "Jones", "alice@example.com");
        store.insert_or_merge("Other", "", "alice@example.com");

        let record = store.get("alice@example.com").unwrap();
        assert_eq!(record.first_name, "Alice");
        assert_eq!(record.last_name, "Smith");
    }

    #[test]
    fn test_address_case_is_significant() {
        let mut store = RecordStore::new();
        store.insert_or_merge("", "", "Alice@example.com");
        store.insert_or_merge("", "", "alice@example.com");

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_sorted_by_address() {
        let mut store = RecordStore::new();
        store.insert_or_merge("", "", "zed@example.com");
        store.insert_or_merge("", "", "Bob@example.com");
        store.insert_or_merge("", "", "amy@example.com");

        let emails: Vec<String> = store.into_sorted().into_iter().map(|r| r.email).collect();
        assert_eq!(emails, vec!["Bob@example.com", "amy@example.com", "zed@example.com"]);
    }
}
