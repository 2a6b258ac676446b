use crate::error::{Result, UserlistError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One user entry. `id` is the key; the other fields are opaque payload and
/// default to `""` and `0` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: u64,
}

impl Record {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: u64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }

    /// Decode a single JSON object. `id` is required; `email` and `age` may be
    /// omitted but must be correctly typed when present. Unknown fields are
    /// ignored.
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(UserlistError::ParseRecord)
    }

    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(UserlistError::Serialize)
    }

    /// Identity check used for duplicate detection. Only `id` counts.
    pub fn same_id(&self, other: &Record) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.id, self.email, self.age)
    }
}
