use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ValidationError};
use crate::model::{Record, Tag};
use crate::safety;
use crate::store::RecordStore;
use log::info;

/// Validates the inputs and returns the trimmed message and thought.
fn validate(message: &str, thought: &str) -> std::result::Result<(String, String), ValidationError> {
    let message = message.trim();
    let thought = thought.trim();

    if message.is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    if let Some(reason) = safety::check(&format!("{} {}", message, thought)) {
        return Err(ValidationError::Unsafe(reason));
    }
    Ok((message.to_string(), thought.to_string()))
}

pub fn run<S: RecordStore>(
    store: &mut S,
    message: &str,
    thought: Option<&str>,
    tag: Option<Tag>,
) -> Result<CmdResult> {
    let (message, thought) = validate(message, thought.unwrap_or_default())?;
    let record = Record::new(message, thought, tag.unwrap_or_default());

    let mut records = store.load();
    records.insert(0, record.clone());
    store.save(&records)?;

    info!(
        "event=record_create status=ok tag={} total={}",
        record.tag,
        records.len()
    );

    let mut result = CmdResult::default().with_affected_records(vec![record]);
    result.add_message(CmdMessage::success(
        "Posted. Your draft is now in the Archive.",
    ));
    Ok(result)
}
