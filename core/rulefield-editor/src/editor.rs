//! The rule list editor state container.
//!
//! Local state is a single [`RecordList`] snapshot that only the host can
//! replace. Mutations borrow the editor immutably: they compute the next list
//! and hand it to the host, and the new state arrives back through
//! [`RuleListEditor::on_value_changed`] when the host echoes it.

use rulefield_model::{RecordField, RecordId, RecordList};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{EditorConfig, EditorView, FieldHost};

/// Everything that can happen to a mounted editor, in delivery order.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The host reports a new stored value.
    ValueChanged(Value),
    /// "Add Item" was activated.
    Append,
    /// A column control changed.
    Edit {
        id: RecordId,
        field: RecordField,
        text: String,
    },
    /// A row's delete control was activated.
    Delete { id: RecordId },
}

#[derive(Debug, Clone)]
pub struct RuleListEditor {
    config: EditorConfig,
    items: RecordList,
}

impl RuleListEditor {
    /// Mounts the editor on `host`.
    ///
    /// Reads the instance parameters, registers for value changes, asks for
    /// an auto-resize and adopts the host's current value when it is a
    /// record list.
    pub fn mount<H: FieldHost + ?Sized>(host: &mut H) -> Self {
        let config = EditorConfig::from_parameters(&host.instance_parameters());
        let mut editor = Self::with_config(config);

        host.watch_value();
        host.request_auto_resize();

        if let Some(value) = host.value() {
            editor.on_value_changed(&value);
        }

        info!(
            records = editor.items.len(),
            value_only = editor.config.value_only,
            operator_column = editor.config.has_operator_column(),
            "Rule list editor mounted"
        );
        editor
    }

    /// An unmounted editor with an empty list.
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            items: RecordList::new(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The last list the host delivered.
    pub fn items(&self) -> &RecordList {
        &self.items
    }

    /// Applies a host value-change notification.
    ///
    /// Record lists replace local state wholesale, even when equal to it.
    /// Anything else is ignored and the current list stays displayed.
    /// Returns whether the state was replaced.
    pub fn on_value_changed(&mut self, value: &Value) -> bool {
        match RecordList::decode(value) {
            Ok(Some(list)) => {
                if !list.has_unique_ids() {
                    warn!(records = list.len(), "Host value contains duplicate record ids");
                }
                debug!(records = list.len(), "Adopting host value");
                self.items = list;
                true
            }
            Ok(None) => {
                debug!("Ignoring non-array host value");
                false
            }
            Err(e) => {
                warn!(error = %e, "Ignoring host value that is not a record list");
                false
            }
        }
    }

    /// Submits the current list plus one blank record. Returns the new
    /// record's identifier.
    pub fn append<H: FieldHost + ?Sized>(&self, host: &mut H) -> RecordId {
        let next = self.items.appended();
        let id = next
            .records()
            .last()
            .map(|r| r.id.clone())
            .unwrap_or_default();
        debug!(record_id = %id, "Appending record");
        host.set_value(&next);
        id
    }

    /// Submits the current list with one field of record `id` replaced.
    ///
    /// Unknown identifiers are a no-op and nothing is submitted. Returns
    /// whether a value was submitted.
    pub fn edit<H: FieldHost + ?Sized>(
        &self,
        host: &mut H,
        id: &RecordId,
        field: RecordField,
        text: &str,
    ) -> bool {
        if !self.items.contains(id) {
            debug!(record_id = %id, %field, "Edit targets unknown record, ignoring");
            return false;
        }
        debug!(record_id = %id, %field, "Editing record");
        host.set_value(&self.items.with_field(id, field, text));
        true
    }

    /// Submits the current list without record `id`.
    ///
    /// Unknown identifiers are a no-op and nothing is submitted. Returns
    /// whether a value was submitted.
    pub fn delete<H: FieldHost + ?Sized>(&self, host: &mut H, id: &RecordId) -> bool {
        if !self.items.contains(id) {
            debug!(record_id = %id, "Delete targets unknown record, ignoring");
            return false;
        }
        debug!(record_id = %id, "Deleting record");
        host.set_value(&self.items.without(id));
        true
    }

    /// Handles one event.
    pub fn dispatch<H: FieldHost + ?Sized>(&mut self, host: &mut H, event: EditorEvent) {
        match event {
            EditorEvent::ValueChanged(value) => {
                self.on_value_changed(&value);
            }
            EditorEvent::Append => {
                self.append(host);
            }
            EditorEvent::Edit { id, field, text } => {
                self.edit(host, &id, field, &text);
            }
            EditorEvent::Delete { id } => {
                self.delete(host, &id);
            }
        }
    }

    /// The current row projection.
    pub fn view(&self) -> EditorView {
        EditorView::project(&self.config, &self.items)
    }
}
