use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, UserlistError};
use crate::model::Record;
use crate::store::RecordStore;
use tracing::{info, warn};

pub fn run<S: RecordStore>(store: &mut S, record: Record) -> Result<CmdResult> {
    let mut collection = store.load()?;
    let mut result = CmdResult::default();

    match collection.add(record.clone()) {
        Ok(()) => {
            store.save(&collection)?;
            info!(id = %record.id, "added record {}", record);
            result.add_message(CmdMessage::info(format!(
                "Item with id {} added",
                record.id
            )));
            result.affected_records.push(record);
        }
        Err(err @ UserlistError::AlreadyExists(_)) => {
            warn!(id = %record.id, "record not added");
            result.add_message(CmdMessage::warning(err.to_string()));
        }
        Err(err) => return Err(err),
    }

    Ok(result)
}
