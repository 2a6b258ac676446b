use crate::commands::CmdResult;
use crate::error::{Result, UserlistError};
use crate::store::RecordStore;
use tracing::debug;

/// Look up a record by id. A missing id is an empty result, not an error.
pub fn run<S: RecordStore>(store: &S, id: &str) -> Result<CmdResult> {
    let collection = store.load()?;

    match collection.get_by_id(id) {
        Ok(record) => Ok(CmdResult::default().with_listed_records(vec![record.clone()])),
        Err(UserlistError::NotFound(_)) => {
            debug!(id, "no record with this id");
            Ok(CmdResult::default())
        }
        Err(err) => Err(err),
    }
}
