use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Record, Sample};
use crate::store::RecordStore;
use chrono::{DateTime, Duration, Utc};
use log::info;

/// Prepends `samples` (in order) ahead of the existing collection.
///
/// Samples are first-party content and skip the safety scan. The first sample
/// is stamped now and each following one an hour earlier.
pub fn run<S: RecordStore>(store: &mut S, samples: &[Sample]) -> Result<CmdResult> {
    run_at(store, samples, Utc::now())
}

pub fn run_at<S: RecordStore>(
    store: &mut S,
    samples: &[Sample],
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let batch: Vec<Record> = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            Record::new_at(
                sample.message.clone(),
                sample.thought.clone(),
                sample.tag,
                now - Duration::hours(i as i64),
            )
        })
        .collect();

    let existing = store.load();
    let mut records = Vec::with_capacity(batch.len() + existing.len());
    records.extend(batch.iter().cloned());
    records.extend(existing);
    store.save(&records)?;

    info!(
        "event=records_seed status=ok added={} total={}",
        batch.len(),
        records.len()
    );

    let mut result = CmdResult::default().with_affected_records(batch);
    result.add_message(CmdMessage::success(
        "Sample drafts added. Check the Archive.",
    ));
    Ok(result)
}
