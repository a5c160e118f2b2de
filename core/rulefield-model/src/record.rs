use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, RecordId};

/// One rule entry: a key / operator / value triple with a stable identifier.
///
/// `operator` is left out of the serialized form while it is empty, so lists
/// edited without an operator column keep the `{id, key, value}` shape the
/// host already stores. Missing or `null` text fields read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub key: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub operator: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Record {
    /// Creates a blank record with a freshly generated identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(RecordId::generate())
    }

    /// Creates a blank record with the given identifier.
    pub fn with_id(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            key: String::new(),
            operator: String::new(),
            value: String::new(),
        }
    }

    /// Returns the text of one editable field.
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::Key => &self.key,
            RecordField::Operator => &self.operator,
            RecordField::Value => &self.value,
        }
    }

    /// Returns a copy of this record with one field replaced.
    #[must_use]
    pub fn with_field(&self, field: RecordField, text: impl Into<String>) -> Self {
        let mut next = self.clone();
        let text = text.into();
        match field {
            RecordField::Key => next.key = text,
            RecordField::Operator => next.operator = text,
            RecordField::Value => next.value = text,
        }
        next
    }

    /// True when every text field is empty.
    pub fn is_blank(&self) -> bool {
        self.key.is_empty() && self.operator.is_empty() && self.value.is_empty()
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

/// The editable text fields of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordField {
    Key,
    Operator,
    Value,
}

impl RecordField {
    pub const ALL: [RecordField; 3] = [RecordField::Key, RecordField::Operator, RecordField::Value];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordField::Key => "key",
            RecordField::Operator => "operator",
            RecordField::Value => "value",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "key" => Ok(RecordField::Key),
            "operator" => Ok(RecordField::Operator),
            "value" => Ok(RecordField::Value),
            other => Err(Error::UnknownField(other.to_string())),
        }
    }
}
