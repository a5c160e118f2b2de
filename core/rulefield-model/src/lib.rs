//! Record model for the rule list field.
//!
//! Defines the types every other part of the editor depends on:
//! - [`RecordId`]: opaque record identifier (fresh ones are UUID v4)
//! - [`Record`]: one key / operator / value row
//! - [`RecordField`]: names the editable text fields of a record
//! - [`RecordList`]: the ordered field value, with pure reducers for
//!   append, field edit and delete
//!
//! Nothing here talks to the host. The reducers return a new list and leave
//! their input untouched.

mod ids;
mod list;
mod record;

pub use ids::RecordId;
pub use list::RecordList;
pub use record::{Record, RecordField};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in model operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown record field: {0}")]
    UnknownField(String),
}
