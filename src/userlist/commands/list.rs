use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let collection = store.load()?;
    Ok(CmdResult::default().with_listed_records(collection.records().to_vec()))
}
