use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, UserlistError};
use crate::store::RecordStore;
use tracing::{info, warn};

pub fn run<S: RecordStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut collection = store.load()?;
    let mut result = CmdResult::default();

    match collection.remove_by_id(id) {
        Ok(removed) => {
            store.save(&collection)?;
            info!(id, remaining = collection.len(), "removed record");
            result.add_message(CmdMessage::info(format!("Item with id {} removed", id)));
            result.affected_records.push(removed);
        }
        Err(err @ UserlistError::NotFound(_)) => {
            warn!(id, "record not removed");
            result.add_message(CmdMessage::warning(err.to_string()));
        }
        Err(err) => return Err(err),
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_and_saves() {
        let mut store = StoreFixture::new().with_records(1).build();

        let result = run(&mut store, "1").unwrap();

        assert_eq!(store.saves(), 1);
        assert!(store.collection().is_empty());
        assert_eq!(result.affected_records[0].id, "1");
        assert_eq!(result.warnings().count(), 0);
    }

    #[test]
    fn removal_moves_last_record_into_the_gap() {
        let mut store = StoreFixture::new().with_records(4).build();

        run(&mut store, "2").unwrap();

        let ids: Vec<_> = store.collection().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4", "3"]);
    }

    #[test]
    fn missing_id_warns_and_does_not_save() {
        let mut store = StoreFixture::new().with_records(1).build();

        let result = run(&mut store, "9").unwrap();

        assert_eq!(store.saves(), 0);
        assert_eq!(store.collection().len(), 1);
        assert!(result.affected_records.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Item with id 9 not found");
    }
}
