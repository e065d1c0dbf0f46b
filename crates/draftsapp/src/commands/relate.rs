use crate::commands::CmdResult;
use crate::error::{DraftsError, Result};
use crate::store::RecordStore;
use log::{debug, info, warn};

/// Adds one reaction to the record with `id`.
///
/// An unknown id is not an error: nothing is written and the result carries no
/// affected records. A counter already at its maximum is an error and nothing
/// is written.
pub fn run<S: RecordStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut records = store.load();

    let Some(record) = records.iter_mut().find(|r| r.id.as_str() == id) else {
        debug!("event=record_relate status=missing");
        return Ok(CmdResult::default());
    };

    let Some(bumped) = record.relates.checked_add(1) else {
        warn!("event=record_relate status=overflow");
        return Err(DraftsError::Store(format!(
            "Draft {} cannot take any more reactions",
            record.id
        )));
    };
    record.relates = bumped;
    let updated = record.clone();
    store.save(&records)?;

    info!("event=record_relate status=ok relates={}", updated.relates);
    Ok(CmdResult::default().with_affected_records(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::stats;
    use crate::error::DraftsError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_relate_increments_by_one() {
        let mut store = StoreFixture::new().with_records(3).store;
        let id = store.load()[1].id.clone();

        let result = run(&mut store, id.as_str()).unwrap();
        assert_eq!(result.affected_records.len(), 1);
        assert_eq!(result.affected_records[0].relates, 1);
        assert_eq!(store.load()[1].relates, 1);
    }

    #[test]
    fn test_relate_k_times_touches_nothing_else() {
        let mut store = StoreFixture::new()
            .with_records(3)
            .with_related_record("popular", 4)
            .store;
        let before = store.load();
        let target = before[3].id.clone();

        for _ in 0..5 {
            run(&mut store, target.as_str()).unwrap();
        }

        let after = store.load();
        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(after.iter()) {
            if old.id == target {
                assert_eq!(new.relates, old.relates + 5);
                let mut expected = old.clone();
                expected.relates = new.relates;
                assert_eq!(new, &expected);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn test_relate_missing_id_is_noop() {
        let mut store = StoreFixture::new().with_records(2).store;
        let before = store.load();
        let stats_before = stats::run(&store).unwrap().stats;
        let writes_before = store.backend().write_count();

        let result = run(&mut store, "does-not-exist").unwrap();

        assert!(result.affected_records.is_empty());
        assert_eq!(store.load(), before);
        assert_eq!(stats::run(&store).unwrap().stats, stats_before);
        assert_eq!(store.backend().write_count(), writes_before);
    }

    #[test]
    fn test_relate_requires_exact_id() {
        let mut store = StoreFixture::new().with_records(1).store;
        let id = store.load()[0].id.clone();
        let result = run(&mut store, id.short()).unwrap();
        assert!(result.affected_records.is_empty());
        assert_eq!(store.load()[0].relates, 0);
    }

    #[test]
    fn test_relate_at_counter_limit_fails_without_write() {
        let mut store = StoreFixture::new()
            .with_related_record("maxed", u64::MAX)
            .store;
        let before = store.load();
        let id = before[0].id.clone();
        let writes_before = store.backend().write_count();

        assert!(matches!(
            run(&mut store, id.as_str()),
            Err(DraftsError::Store(_))
        ));
        assert_eq!(store.load(), before);
        assert_eq!(store.backend().write_count(), writes_before);
    }

    #[test]
    fn test_relate_write_failure_surfaces() {
        let mut store = StoreFixture::new().with_records(1).store;
        let id = store.load()[0].id.clone();
        store.backend().set_simulate_write_error(true);
        assert!(matches!(
            run(&mut store, id.as_str()),
            Err(DraftsError::Store(_))
        ));
        store.backend().set_simulate_write_error(false);
        assert_eq!(store.load()[0].relates, 0);
    }
}
