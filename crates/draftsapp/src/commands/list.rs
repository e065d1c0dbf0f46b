use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::{self, RecordQuery};
use crate::store::RecordStore;
use log::debug;

/// Archive view: the stored collection run through the query engine.
pub fn run<S: RecordStore>(store: &S, query: &RecordQuery) -> Result<CmdResult> {
    let records = store.load();
    let view = query::run(&records, query);

    debug!(
        "event=records_query status=ok tag={} sort={} matched={} total={}",
        query.tag,
        query.sort,
        view.len(),
        records.len()
    );

    let mut result = CmdResult::default();
    if view.is_empty() {
        result.add_message(CmdMessage::info("No matching drafts yet."));
    }
    Ok(result.with_listed_records(view))
}
