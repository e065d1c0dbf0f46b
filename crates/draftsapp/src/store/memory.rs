use super::mem_backend::MemBackend;
use super::slot_store::SlotStore;

pub type InMemoryStore = SlotStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        SlotStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Record, Tag};
    use crate::store::RecordStore;
    use chrono::{Duration, TimeZone, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        records: Vec<Record>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                records: Vec::new(),
            }
        }

        /// Appends `count` records, each an hour older than the one before.
        pub fn with_records(mut self, count: usize) -> Self {
            let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
            for i in 0..count {
                let offset = (self.records.len() + i) as i64;
                let record = Record::new_at(
                    format!("Test message {}", i + 1),
                    format!("Thought for message {}", i + 1),
                    Tag::Unspecified,
                    base - Duration::hours(offset),
                );
                self.records.push(record);
            }
            self.persist()
        }

        pub fn with_record(mut self, message: &str, thought: &str, tag: Tag) -> Self {
            self.records.push(Record::new(message, thought, tag));
            self.persist()
        }

        pub fn with_related_record(mut self, message: &str, relates: u64) -> Self {
            let mut record = Record::new(message, "", Tag::Unspecified);
            record.relates = relates;
            self.records.push(record);
            self.persist()
        }

        fn persist(mut self) -> Self {
            self.store.save(&self.records).unwrap();
            self
        }
    }
}
