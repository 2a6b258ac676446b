use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserlistError {
    #[error("-{0} flag has to be specified")]
    MissingArgument(&'static str),

    #[error("Operation {0} not allowed!")]
    UnsupportedOperation(String),

    #[error("unmarshal user from json error: {0}")]
    ParseRecord(#[source] serde_json::Error),

    #[error("unmarshal users from json error: {0}")]
    ParseCollection(#[source] serde_json::Error),

    #[error("marshal to json error: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("open file with users error: {0}")]
    OpenFile(#[source] std::io::Error),

    #[error("read file with users error: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("write file with users error: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("write output error: {0}")]
    Output(#[source] std::io::Error),

    #[error("Item with id {0} already exists")]
    AlreadyExists(String),

    #[error("Item with id {0} not found")]
    NotFound(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, UserlistError>;
