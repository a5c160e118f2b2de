//! Host abstraction.
//!
//! The host platform owns the stored field value, the instance parameters and
//! the surrounding chrome. The editor reaches it only through [`FieldHost`],
//! so any platform (a CMS field frame, a file on disk, a test double) can
//! embed the editor.

use rulefield_model::RecordList;
use serde_json::Value;
use std::collections::VecDeque;
use tracing::warn;

use crate::InstanceParameters;

/// The host surface consumed by the editor.
pub trait FieldHost {
    /// Instance-level parameters. Queried once at mount.
    fn instance_parameters(&self) -> InstanceParameters;

    /// The value the host currently stores for the field, if any.
    fn value(&self) -> Option<Value>;

    /// Registers the editor for value-change notifications.
    ///
    /// After this call the host delivers every change of the stored value,
    /// including the echo of the editor's own `set_value`, as
    /// [`EditorEvent::ValueChanged`](crate::EditorEvent::ValueChanged).
    fn watch_value(&mut self);

    /// Asks the host to persist `list` as the field's new value.
    /// Fire-and-forget: no confirmation is part of the contract.
    fn set_value(&mut self, list: &RecordList);

    /// One-time hint that the hosting frame should size itself to the
    /// editor's content.
    fn request_auto_resize(&mut self);
}

/// In-memory host that echoes every submitted value back as a notification.
///
/// Notifications queue up in submission order until the embedder drains them
/// with [`take_notifications`](MemoryHost::take_notifications).
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    parameters: InstanceParameters,
    value: Option<Value>,
    watching: bool,
    resize_requests: usize,
    submissions: Vec<Value>,
    pending: VecDeque<Value>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: InstanceParameters) -> Self {
        self.parameters = parameters;
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    /// The value currently stored.
    pub fn stored_value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Every value the editor submitted, oldest first.
    pub fn submissions(&self) -> &[Value] {
        &self.submissions
    }

    pub fn is_watching(&self) -> bool {
        self.watching
    }

    pub fn resize_requests(&self) -> usize {
        self.resize_requests
    }

    /// Replaces the stored value from outside the editor (another client,
    /// an API write) and notifies the editor if it is watching.
    pub fn replace_value(&mut self, value: Value) {
        self.store(value);
    }

    /// Drains queued value-change notifications in delivery order.
    pub fn take_notifications(&mut self) -> Vec<Value> {
        self.pending.drain(..).collect()
    }

    fn store(&mut self, value: Value) {
        if self.watching {
            self.pending.push_back(value.clone());
        }
        self.value = Some(value);
    }
}

impl FieldHost for MemoryHost {
    fn instance_parameters(&self) -> InstanceParameters {
        self.parameters.clone()
    }

    fn value(&self) -> Option<Value> {
        self.value.clone()
    }

    fn watch_value(&mut self) {
        self.watching = true;
    }

    fn set_value(&mut self, list: &RecordList) {
        match list.to_value() {
            Ok(value) => {
                self.submissions.push(value.clone());
                self.store(value);
            }
            Err(e) => warn!(error = %e, "Failed to encode submitted list"),
        }
    }

    fn request_auto_resize(&mut self) {
        self.resize_requests += 1;
    }
}
