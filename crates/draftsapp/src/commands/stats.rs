use crate::commands::{CmdResult, Stats};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Totals for the home view. The relates sum saturates at `u64::MAX`.
pub fn compute(records: &[Record]) -> Stats {
    Stats {
        records: records.len(),
        relates: records
            .iter()
            .fold(0u64, |total, r| total.saturating_add(r.relates)),
    }
}

pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let records = store.load();
    Ok(CmdResult::default().with_stats(compute(&records)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_stats_empty() {
        let store = InMemoryStore::new();
        assert_eq!(run(&store).unwrap().stats, Some(Stats::default()));
    }

    #[test]
    fn test_stats_sums_relates() {
        let store = StoreFixture::new()
            .with_records(2)
            .with_related_record("a", 3)
            .with_related_record("b", 4)
            .store;
        let stats = run(&store).unwrap().stats.unwrap();
        assert_eq!(stats.records, 4);
        assert_eq!(stats.relates, 7);
    }

    #[test]
    fn test_stats_sum_saturates() {
        let store = StoreFixture::new()
            .with_related_record("maxed", u64::MAX)
            .with_related_record("one more", 1)
            .store;
        let stats = run(&store).unwrap().stats.unwrap();
        assert_eq!(stats.records, 2);
        assert_eq!(stats.relates, u64::MAX);
    }
}
