use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

/// The first `count` records in stored order, unfiltered and unsorted.
pub fn run<S: RecordStore>(store: &S, count: usize) -> Result<CmdResult> {
    let records = store.load();
    let picks: Vec<_> = records.into_iter().take(count).collect();

    let mut result = CmdResult::default();
    if picks.is_empty() {
        result.add_message(CmdMessage::info(
            "No drafts yet. Use `drafts post` to write the first one.",
        ));
    }
    Ok(result.with_listed_records(picks))
}
