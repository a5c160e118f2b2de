//! Named-command bridge.
//!
//! Hosts that drive guests by command name plus JSON arguments call
//! [`RuleListEditor::handle_command`]. Every failure becomes an unsuccessful
//! [`CommandResponse`]; nothing is submitted to the host in that case.

use rulefield_model::{RecordField, RecordId};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{EditorError, EditorResult, FieldHost, RuleListEditor};

/// Command names accepted by the bridge.
pub mod names {
    pub const ADD_ITEM: &str = "add_item";
    pub const EDIT_ITEM: &str = "edit_item";
    pub const DELETE_ITEM: &str = "delete_item";
    pub const GET_VIEW: &str = "get_view";
}

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    AddItem,
    EditItem {
        id: RecordId,
        field: RecordField,
        value: String,
    },
    DeleteItem {
        id: RecordId,
    },
    GetView,
}

#[derive(Deserialize)]
struct EditArgs {
    id: RecordId,
    field: String,
    value: String,
}

#[derive(Deserialize)]
struct DeleteArgs {
    id: RecordId,
}

impl EditorCommand {
    /// Parses a command name and its JSON arguments.
    pub fn parse(name: &str, args: &str) -> EditorResult<Self> {
        match name {
            names::ADD_ITEM => Ok(Self::AddItem),
            names::GET_VIEW => Ok(Self::GetView),
            names::EDIT_ITEM => {
                let a: EditArgs = parse_args(name, args)?;
                Ok(Self::EditItem {
                    id: a.id,
                    field: a.field.parse()?,
                    value: a.value,
                })
            }
            names::DELETE_ITEM => {
                let a: DeleteArgs = parse_args(name, args)?;
                Ok(Self::DeleteItem { id: a.id })
            }
            other => Err(EditorError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_args<T: serde::de::DeserializeOwned>(command: &str, args: &str) -> EditorResult<T> {
    serde_json::from_str(args).map_err(|source| EditorError::InvalidArguments {
        command: command.to_string(),
        source,
    })
}

/// Result of a bridged command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// JSON-encoded payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl CommandResponse {
    pub fn ok(data: String) -> Self {
        Self {
            success: true,
            error_code: None,
            error_message: None,
            data: Some(data),
        }
    }

    pub fn error(err: &EditorError) -> Self {
        Self {
            success: false,
            error_code: Some(err.code()),
            error_message: Some(err.to_string()),
            data: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.success
    }

    /// Parse the data field as a typed value.
    pub fn parse_data<T: serde::de::DeserializeOwned>(&self) -> Option<T> {
        self.data
            .as_ref()
            .and_then(|d| serde_json::from_str(d).ok())
    }
}

/// Payload of `add_item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedItem {
    pub id: RecordId,
}

/// Payload of `edit_item` and `delete_item`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// False when the target record was not found and nothing was sent.
    pub submitted: bool,
}

impl RuleListEditor {
    /// Runs a named command against the host.
    pub fn handle_command<H: FieldHost + ?Sized>(
        &self,
        host: &mut H,
        name: &str,
        args: &str,
    ) -> CommandResponse {
        match self.run_command(host, name, args) {
            Ok(data) => CommandResponse::ok(data),
            Err(e) => {
                warn!(command = name, error = %e, "Command rejected");
                CommandResponse::error(&e)
            }
        }
    }

    fn run_command<H: FieldHost + ?Sized>(
        &self,
        host: &mut H,
        name: &str,
        args: &str,
    ) -> EditorResult<String> {
        let data = match EditorCommand::parse(name, args)? {
            EditorCommand::AddItem => serde_json::to_string(&AddedItem {
                id: self.append(host),
            })?,
            EditorCommand::EditItem { id, field, value } => serde_json::to_string(&Submission {
                submitted: self.edit(host, &id, field, &value),
            })?,
            EditorCommand::DeleteItem { id } => serde_json::to_string(&Submission {
                submitted: self.delete(host, &id),
            })?,
            EditorCommand::GetView => serde_json::to_string(&self.view())?,
        };
        Ok(data)
    }
}
