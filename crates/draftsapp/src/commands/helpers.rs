use crate::error::{DraftsError, Result};
use crate::model::{Record, RecordId};

/// Shortest prefix accepted when resolving ids typed by a person.
pub const MIN_PREFIX_LEN: usize = 4;

/// Resolves a full id or an unambiguous id prefix to a stored id.
///
/// - An exact match always wins.
/// - Otherwise a prefix of at least [`MIN_PREFIX_LEN`] characters matching
///   exactly one record resolves to it.
/// - No match gives `Ok(None)`; several matches give an error.
pub fn resolve_id(records: &[Record], input: &str) -> Result<Option<RecordId>> {
    let input = input.trim();
    if let Some(r) = records.iter().find(|r| r.id.as_str() == input) {
        return Ok(Some(r.id.clone()));
    }
    if input.chars().count() < MIN_PREFIX_LEN {
        return Ok(None);
    }

    let mut matches = records.iter().filter(|r| r.id.as_str().starts_with(input));
    match (matches.next(), matches.next()) {
        (None, _) => Ok(None),
        (Some(only), None) => Ok(Some(only.id.clone())),
        (Some(_), Some(_)) => Err(DraftsError::Api(format!(
            "Id prefix '{}' matches more than one draft",
            input
        ))),
    }
}
