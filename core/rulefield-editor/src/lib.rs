//! Host-synchronized editor for the rule list field.
//!
//! A [`RuleListEditor`] is mounted on a [`FieldHost`]. From then on:
//! - the host's stored value is the single source of truth, delivered through
//!   [`RuleListEditor::on_value_changed`] (or [`EditorEvent::ValueChanged`]);
//! - author actions ([`append`], [`edit`], [`delete`]) compute the next full
//!   list and submit it with [`FieldHost::set_value`], leaving local state for
//!   the host's echo to replace;
//! - [`RuleListEditor::view`] projects the list into rows for rendering.
//!
//! [`append`]: RuleListEditor::append
//! [`edit`]: RuleListEditor::edit
//! [`delete`]: RuleListEditor::delete
//!
//! # Example
//!
//! ```
//! use rulefield_editor::{MemoryHost, RuleListEditor};
//! use serde_json::json;
//!
//! let mut host = MemoryHost::new().with_value(json!([
//!     {"id": "a", "key": "includes", "value": "x"}
//! ]));
//! let mut editor = RuleListEditor::mount(&mut host);
//! assert_eq!(editor.items().len(), 1);
//!
//! editor.append(&mut host);
//! assert_eq!(editor.items().len(), 1); // not applied until the host echoes
//!
//! for value in host.take_notifications() {
//!     editor.on_value_changed(&value);
//! }
//! assert_eq!(editor.items().len(), 2);
//! ```

mod column;
pub mod command;
mod config;
mod editor;
mod error;
mod host;
mod view;

pub use column::{ChoiceOption, ColumnControl, ColumnSpec};
pub use command::{AddedItem, CommandResponse, EditorCommand, Submission};
pub use config::{
    DEFAULT_OPERATOR_NAME, DEFAULT_SELECT_NAME, DEFAULT_SELECT_OPTIONS, DEFAULT_VALUE_NAME,
    EditorConfig, InstanceParameters, params, parse_options,
};
pub use editor::{EditorEvent, RuleListEditor};
pub use error::{EditorError, EditorResult};
pub use host::{FieldHost, MemoryHost};
pub use view::{
    ADD_ITEM_LABEL, ActionView, CellControl, CellView, DELETE_ITEM_LABEL, EditorView, RowView,
};

pub use rulefield_model::{Error as ModelError, Record, RecordField, RecordId, RecordList};
