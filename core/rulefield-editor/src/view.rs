//! Row projection.
//!
//! [`EditorView`] is a pure function of the configuration and the current
//! list. Hosts render it however they like; actions name the command that the
//! command bridge accepts for them.

use rulefield_model::{Record, RecordField, RecordId, RecordList};
use serde::{Deserialize, Serialize};

use crate::command::names;
use crate::{ChoiceOption, ColumnControl, ColumnSpec, EditorConfig};

pub const ADD_ITEM_LABEL: &str = "Add Item";
pub const DELETE_ITEM_LABEL: &str = "Delete";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorView {
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<RowView>,
    pub add_action: ActionView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowView {
    pub id: RecordId,
    /// One cell per column, in column order.
    pub cells: Vec<CellView>,
    pub delete_action: ActionView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub field: RecordField,
    pub control: CellControl,
}

/// A column control bound to one record's current text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellControl {
    FreeText {
        text: String,
    },
    Choice {
        /// Current text; empty selects the placeholder.
        selected: String,
        choices: Vec<ChoiceOption>,
    },
}

impl CellControl {
    /// The record text this control shows.
    pub fn text(&self) -> &str {
        match self {
            Self::FreeText { text } => text,
            Self::Choice { selected, .. } => selected,
        }
    }
}

/// A button-like control and the command it triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionView {
    pub label: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<RecordId>,
}

impl EditorView {
    /// Projects `items` through the columns `config` produces.
    pub fn project(config: &EditorConfig, items: &RecordList) -> Self {
        let columns = config.columns();
        let rows = items.iter().map(|record| project_row(&columns, record)).collect();
        Self {
            columns,
            rows,
            add_action: ActionView {
                label: ADD_ITEM_LABEL.into(),
                command: names::ADD_ITEM.into(),
                record_id: None,
            },
        }
    }

    /// True when a column for `field` exists.
    pub fn has_column(&self, field: RecordField) -> bool {
        self.columns.iter().any(|c| c.field == field)
    }
}

fn project_row(columns: &[ColumnSpec], record: &Record) -> RowView {
    let cells = columns
        .iter()
        .map(|column| {
            let text = record.field(column.field).to_string();
            let control = match &column.control {
                ColumnControl::FreeText => CellControl::FreeText { text },
                choice @ ColumnControl::Choice { .. } => CellControl::Choice {
                    selected: text,
                    choices: choice.choices(),
                },
            };
            CellView {
                field: column.field,
                control,
            }
        })
        .collect();

    RowView {
        id: record.id.clone(),
        cells,
        delete_action: ActionView {
            label: DELETE_ITEM_LABEL.into(),
            command: names::DELETE_ITEM.into(),
            record_id: Some(record.id.clone()),
        },
    }
}
