//! # Operation Dispatcher
//!
//! The single entry point for every userlist operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! - **Validates** the neutral [`Arguments`] map before any file is touched
//! - **Dispatches** to the command module for the requested [`Operation`]
//! - **Renders** the resulting `CmdResult` into an output sink
//!
//! Validation order is fixed: `fileName`, then `operation`, then whether the
//! operation exists, then the operation's own arguments, then parsing `item`.
//! The first failure wins.
//!
//! ## Output
//!
//! | Operation | Success output | Domain notice |
//! |-----------|----------------|---------------|
//! | `add` | nothing | `Item with id <id> already exists` |
//! | `list` | JSON array of all records | none |
//! | `findById` | JSON object of the record | none (empty output) |
//! | `remove` | nothing | `Item with id <id> not found` |
//!
//! Notices are output, not failures: the call still returns `Ok(())`.
//!
//! ## Generic Over RecordStore
//!
//! [`UserlistApi<S>`] works with any [`RecordStore`]; [`perform`] wires it to a
//! [`FileStore`] at `fileName`.

use crate::commands::{self, CmdResult};
use crate::config::UserlistConfig;
use crate::error::{Result, UserlistError};
use crate::model::Record;
use crate::store::fs::FileStore;
use crate::store::RecordStore;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

pub const ARG_FILE_NAME: &str = "fileName";
pub const ARG_OPERATION: &str = "operation";
pub const ARG_ITEM: &str = "item";
pub const ARG_ID: &str = "id";

/// Named string arguments, as produced by the command line.
///
/// An empty value is treated the same as an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments(BTreeMap<String, String>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    fn require(&self, key: &'static str) -> Result<&str> {
        self.get(key).ok_or(UserlistError::MissingArgument(key))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (key, value) in iter {
            args.insert(key, value);
        }
        args
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    List,
    FindById,
    Remove,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::List,
        Operation::FindById,
        Operation::Remove,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::List => "list",
            Operation::FindById => "findById",
            Operation::Remove => "remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UserlistError;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UserlistError::UnsupportedOperation(s.to_string()))
    }
}

/// A fully validated operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Add(Record),
    List,
    FindById(String),
    Remove(String),
}

impl Request {
    pub fn operation(&self) -> Operation {
        match self {
            Request::Add(_) => Operation::Add,
            Request::List => Operation::List,
            Request::FindById(_) => Operation::FindById,
            Request::Remove(_) => Operation::Remove,
        }
    }
}

/// Validate `args` and extract the target file and the request.
pub fn parse_arguments(args: &Arguments) -> Result<(PathBuf, Request)> {
    let file_name = PathBuf::from(args.require(ARG_FILE_NAME)?);
    let operation: Operation = args.require(ARG_OPERATION)?.parse()?;

    let request = match operation {
        Operation::Add => Request::Add(Record::parse(args.require(ARG_ITEM)?)?),
        Operation::List => Request::List,
        Operation::FindById => Request::FindById(args.require(ARG_ID)?.to_string()),
        Operation::Remove => Request::Remove(args.require(ARG_ID)?.to_string()),
    };

    Ok((file_name, request))
}

/// Facade over the command layer for one store.
pub struct UserlistApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> UserlistApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add(&mut self, record: Record) -> Result<CmdResult> {
        commands::add::run(&mut self.store, record)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn find_by_id(&self, id: &str) -> Result<CmdResult> {
        commands::find::run(&self.store, id)
    }

    pub fn remove(&mut self, id: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn execute(&mut self, request: Request) -> Result<CmdResult> {
        match request {
            Request::Add(record) => self.add(record),
            Request::List => self.list(),
            Request::FindById(id) => self.find_by_id(&id),
            Request::Remove(id) => self.remove(&id),
        }
    }

    /// Execute `request` and write its output to `writer`.
    pub fn dispatch<W: Write>(&mut self, request: Request, writer: &mut W) -> Result<()> {
        let operation = request.operation();
        debug!(%operation, "dispatching");
        let result = self.execute(request)?;
        render(operation, &result, writer)
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Run one invocation against the file named in `args`, with default settings.
pub fn perform<W: Write>(args: &Arguments, writer: &mut W) -> Result<()> {
    perform_with_config(args, &UserlistConfig::default(), writer)
}

pub fn perform_with_config<W: Write>(
    args: &Arguments,
    config: &UserlistConfig,
    writer: &mut W,
) -> Result<()> {
    let (file_name, request) = parse_arguments(args)?;
    let store = FileStore::new(&file_name).with_file_mode(config.file_mode);
    UserlistApi::new(store).dispatch(request, writer)
}

fn render<W: Write>(operation: Operation, result: &CmdResult, writer: &mut W) -> Result<()> {
    match operation {
        Operation::List => {
            let bytes = serde_json::to_vec(&result.listed_records)
                .map_err(UserlistError::Serialize)?;
            writer.write_all(&bytes).map_err(UserlistError::Output)?;
        }
        Operation::FindById => {
            if let Some(record) = result.listed_records.first() {
                writer
                    .write_all(&record.to_json_bytes()?)
                    .map_err(UserlistError::Output)?;
            }
        }
        Operation::Add | Operation::Remove => {}
    }

    // Info messages are already logged by the commands
    for message in result.warnings() {
        writer
            .write_all(message.content.as_bytes())
            .map_err(UserlistError::Output)?;
    }

    writer.flush().map_err(UserlistError::Output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::TestEnv;

    const ITEM: &str = r#"{"id":"1","email":"a@x.com","age":30}"#;

    fn args(pairs: &[(&str, &str)]) -> Arguments {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn run(args: &Arguments) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = perform(args, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    // --- validation ---

    #[test]
    fn missing_file_name_is_reported_first() {
        let err = parse_arguments(&args(&[("operation", "bogus")])).unwrap_err();
        assert!(matches!(err, UserlistError::MissingArgument("fileName")));
        assert_eq!(err.to_string(), "-fileName flag has to be specified");
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let err = parse_arguments(&args(&[("fileName", ""), ("operation", "list")])).unwrap_err();
        assert!(matches!(err, UserlistError::MissingArgument("fileName")));
    }

    #[test]
    fn missing_operation() {
        let err = parse_arguments(&args(&[("fileName", "users.json")])).unwrap_err();
        assert!(matches!(err, UserlistError::MissingArgument("operation")));
    }

    #[test]
    fn unsupported_operation_names_the_value() {
        let err = parse_arguments(&args(&[("fileName", "users.json"), ("operation", "bogus")]))
            .unwrap_err();
        assert!(matches!(err, UserlistError::UnsupportedOperation(ref op) if op == "bogus"));
        assert_eq!(err.to_string(), "Operation bogus not allowed!");
    }

    #[test]
    fn operation_names_are_case_sensitive() {
        assert!("findbyid".parse::<Operation>().is_err());
        assert_eq!("findById".parse::<Operation>().unwrap(), Operation::FindById);
    }

    #[test]
    fn add_requires_item() {
        let err = parse_arguments(&args(&[("fileName", "users.json"), ("operation", "add")]))
            .unwrap_err();
        assert!(matches!(err, UserlistError::MissingArgument("item")));
    }

    #[test]
    fn find_and_remove_require_id() {
        for op in ["findById", "remove"] {
            let err = parse_arguments(&args(&[("fileName", "users.json"), ("operation", op)]))
                .unwrap_err();
            assert!(matches!(err, UserlistError::MissingArgument("id")));
        }
    }

    #[test]
    fn parses_add_request() {
        let (file, request) = parse_arguments(&args(&[
            ("fileName", "users.json"),
            ("operation", "add"),
            ("item", ITEM),
        ]))
        .unwrap();
        assert_eq!(file, PathBuf::from("users.json"));
        assert_eq!(request, Request::Add(Record::new("1", "a@x.com", 30)));
    }

    #[test]
    fn validation_failures_do_not_touch_the_file() {
        let env = TestEnv::new();
        let file = env.path.to_str().unwrap();

        for bad in [
            args(&[("fileName", file)]),
            args(&[("fileName", file), ("operation", "bogus")]),
            args(&[("fileName", file), ("operation", "add")]),
            args(&[("fileName", file), ("operation", "add"), ("item", "{broken")]),
            args(&[("fileName", file), ("operation", "remove")]),
        ] {
            assert!(run(&bad).0.is_err());
        }
        assert!(!env.path.exists());
    }

    #[test]
    fn malformed_item_is_parse_error() {
        let env = TestEnv::new();
        let (result, _) = run(&args(&[
            ("fileName", env.path.to_str().unwrap()),
            ("operation", "add"),
            ("item", r#"{"id":"1","email":"a@x.com","age":"thirty"}"#),
        ]));
        assert!(matches!(result, Err(UserlistError::ParseRecord(_))));
    }

    #[test]
    fn add_accepts_item_without_email_and_age() {
        let env = TestEnv::new();
        let file = env.path.to_str().unwrap();

        let (result, out) = run(&args(&[
            ("fileName", file),
            ("operation", "add"),
            ("item", r#"{"id":"2","age":5}"#),
        ]));
        result.unwrap();
        assert_eq!(out, "");
        assert_eq!(env.content(), r#"[{"id":"2","email":"","age":5}]"#);
    }

    #[test]
    fn list_accepts_stored_records_without_age() {
        let env = TestEnv::with_content(r#"[{"id":"1","email":"a@x.com"}]"#);
        let (result, out) = run(&args(&[
            ("fileName", env.path.to_str().unwrap()),
            ("operation", "list"),
        ]));
        result.unwrap();
        assert_eq!(out, r#"[{"id":"1","email":"a@x.com","age":0}]"#);
    }

    // --- rendering via the in-memory store ---

    #[test]
    fn list_renders_json_array() {
        let mut api = UserlistApi::new(StoreFixture::new().with_record("1", "a@x.com", 30).build());
        let mut out = Vec::new();
        api.dispatch(Request::List, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("[{}]", ITEM));
    }

    #[test]
    fn list_of_empty_store_renders_empty_array() {
        let mut api = UserlistApi::new(InMemoryStore::new());
        let mut out = Vec::new();
        api.dispatch(Request::List, &mut out).unwrap();
        assert_eq!(out, b"[]");
    }

    #[test]
    fn find_renders_single_object() {
        let mut api = UserlistApi::new(StoreFixture::new().with_record("1", "a@x.com", 30).build());
        let mut out = Vec::new();
        api.dispatch(Request::FindById("1".into()), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ITEM);
    }

    #[test]
    fn html_characters_are_written_unescaped() {
        let store = StoreFixture::new().with_record("1", "a&b<c>@x.com", 1).build();
        let mut api = UserlistApi::new(store);
        let mut out = Vec::new();
        api.dispatch(Request::FindById("1".into()), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"{"id":"1","email":"a&b<c>@x.com","age":1}"#
        );
    }

    #[test]
    fn successful_mutations_render_nothing() {
        let mut api = UserlistApi::new(InMemoryStore::new());
        let mut out = Vec::new();
        api.dispatch(Request::Add(Record::new("1", "a@x.com", 30)), &mut out)
            .unwrap();
        api.dispatch(Request::Remove("1".into()), &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(api.store().saves(), 2);
    }

    // --- end to end against a real file ---

    #[test]
    fn add_list_remove_find_scenario() {
        let env = TestEnv::with_content("");
        let file = env.path.to_str().unwrap();

        let (result, out) = run(&args(&[("fileName", file), ("operation", "add"), ("item", ITEM)]));
        result.unwrap();
        assert_eq!(out, "");

        let (result, out) = run(&args(&[("fileName", file), ("operation", "list")]));
        result.unwrap();
        assert_eq!(out, format!("[{}]", ITEM));

        let (result, out) = run(&args(&[("fileName", file), ("operation", "add"), ("item", ITEM)]));
        result.unwrap();
        assert_eq!(out, "Item with id 1 already exists");
        assert_eq!(env.content(), format!("[{}]", ITEM));

        let (result, out) = run(&args(&[("fileName", file), ("operation", "remove"), ("id", "9")]));
        result.unwrap();
        assert_eq!(out, "Item with id 9 not found");
        assert_eq!(env.content(), format!("[{}]", ITEM));

        let (result, out) = run(&args(&[("fileName", file), ("operation", "remove"), ("id", "1")]));
        result.unwrap();
        assert_eq!(out, "");
        assert_eq!(env.content(), "[]");

        let (result, out) = run(&args(&[("fileName", file), ("operation", "findById"), ("id", "1")]));
        result.unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn list_creates_missing_file() {
        let env = TestEnv::new();
        let (result, out) = run(&args(&[
            ("fileName", env.path.to_str().unwrap()),
            ("operation", "list"),
        ]));
        result.unwrap();
        assert_eq!(out, "[]");
        assert!(env.path.exists());
    }

    #[test]
    fn corrupt_file_fails_the_operation() {
        let env = TestEnv::with_content("[{\"id\":");
        let (result, out) = run(&args(&[
            ("fileName", env.path.to_str().unwrap()),
            ("operation", "list"),
        ]));
        assert!(matches!(result, Err(UserlistError::ParseCollection(_))));
        assert_eq!(out, "");
    }
}
