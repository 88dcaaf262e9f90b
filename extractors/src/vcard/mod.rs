mod card;

pub use card::{split_cards, unfold_lines, Card};

use crate::record_store::RecordStore;
use shared_types::{EmailRecord, RecordSource, SourceFormat};

/// Reads contact cards; every valid `EMAIL` of a card becomes a record
/// carrying that card's name.
pub struct VcfIngester;

impl VcfIngester {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VcfIngester {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for VcfIngester {
    fn parse(&self, content: &str) -> Vec<EmailRecord> {
        let mut store = RecordStore::new();

        let bodies = split_cards(content);
        tracing::debug!(cards = bodies.len(), "Split vCard content");

        for body in bodies {
            let card = Card::parse(body);
            let emails = card.valid_emails();

            if emails.is_empty() {
                continue;
            }

            let (first_name, last_name) = card.names();
            for email in &emails {
                store.insert_or_merge(&first_name, &last_name, email);
            }
        }

        store.into_sorted()
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Vcf
    }
}
