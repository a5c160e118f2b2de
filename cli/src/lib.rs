//! File-backed host for the rule list editor.
//!
//! The field value lives in a JSON file, instance parameters come from a JSON
//! object file plus `NAME=VALUE` overrides. [`FileHost`] implements
//! [`FieldHost`] on top of that so the editor can be driven from a shell.

use rulefield_editor::{
    ColumnControl, EditorView, FieldHost, InstanceParameters, ModelError, RecordList,
};
use serde_json::Value;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum HostFileError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode field value: {0}")]
    Encode(#[from] ModelError),

    #[error("instance parameters must be a JSON object")]
    ParametersNotObject,

    #[error("invalid parameter override '{0}': expected NAME=VALUE")]
    InvalidOverride(String),
}

/// A host whose stored field value is a JSON file.
#[derive(Debug)]
pub struct FileHost {
    path: PathBuf,
    parameters: InstanceParameters,
    value: Option<Value>,
    watching: bool,
    pending: Vec<Value>,
    write_error: Option<HostFileError>,
}

impl FileHost {
    /// Opens the value file. A missing file means the field has no value yet.
    pub fn open(
        path: impl Into<PathBuf>,
        parameters: InstanceParameters,
    ) -> Result<Self, HostFileError> {
        let path = path.into();
        let value = read_json(&path)?;
        debug!(path = %path.display(), has_value = value.is_some(), "Opened field value file");
        Ok(Self {
            path,
            parameters,
            value,
            watching: false,
            pending: Vec::new(),
            write_error: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drains value-change notifications produced by writes.
    pub fn take_notifications(&mut self) -> Vec<Value> {
        std::mem::take(&mut self.pending)
    }

    /// The error of the most recent failed write, if any.
    pub fn take_write_error(&mut self) -> Option<HostFileError> {
        self.write_error.take()
    }

    fn write(&self, value: &Value) -> Result<(), HostFileError> {
        let json = serde_json::to_string_pretty(value).map_err(|source| HostFileError::Json {
            path: self.path.clone(),
            source,
        })?;
        let io_err = |source: io::Error| HostFileError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let tmp = tmp_path(&self.path);
        let written = fs::write(&tmp, json).and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(source) = written {
            let _ = fs::remove_file(&tmp);
            return Err(io_err(source));
        }
        Ok(())
    }
}

impl FieldHost for FileHost {
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
        let saved = list
            .to_value()
            .map_err(HostFileError::from)
            .and_then(|value| self.write(&value).map(|()| value));
        match saved {
            Ok(value) => {
                info!(path = %self.path.display(), records = list.len(), "Field value saved");
                if self.watching {
                    self.pending.push(value.clone());
                }
                self.value = Some(value);
            }
            Err(e) => {
                warn!(error = %e, "Failed to save field value");
                self.write_error = Some(e);
            }
        }
    }

    fn request_auto_resize(&mut self) {
        debug!("Auto-resize requested; terminal output sizes itself");
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "field".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}

fn read_json(path: &Path) -> Result<Option<Value>, HostFileError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(HostFileError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| HostFileError::Json {
            path: path.to_path_buf(),
            source,
        })
}

/// Builds instance parameters from an optional JSON file and `NAME=VALUE`
/// overrides. Overrides win; `true` and `false` become booleans.
pub fn load_parameters(
    file: Option<&Path>,
    overrides: &[String],
) -> Result<InstanceParameters, HostFileError> {
    let mut parameters = match file {
        Some(path) => match read_json(path)? {
            Some(Value::Object(map)) => map,
            Some(_) => return Err(HostFileError::ParametersNotObject),
            None => InstanceParameters::new(),
        },
        None => InstanceParameters::new(),
    };
    for entry in overrides {
        let (name, raw) = entry
            .split_once('=')
            .filter(|(name, _)| !name.trim().is_empty())
            .ok_or_else(|| HostFileError::InvalidOverride(entry.clone()))?;
        let value = match raw {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            other => Value::String(other.to_string()),
        };
        parameters.insert(name.trim().to_string(), value);
    }
    Ok(parameters)
}

const EMPTY_CELL: &str = "-";

/// Renders the projection as a plain-text table.
pub fn render_table(view: &EditorView) -> String {
    let mut header: Vec<String> = view
        .columns
        .iter()
        .map(|c| match &c.control {
            ColumnControl::FreeText => c.label.clone(),
            ColumnControl::Choice { options } => format!("{} ({})", c.label, options.join("|")),
        })
        .collect();
    header.push("id".to_string());

    let rows: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|row| {
            let mut cells: Vec<String> = row
                .cells
                .iter()
                .map(|cell| match cell.control.text() {
                    "" => EMPTY_CELL.to_string(),
                    text => text.to_string(),
                })
                .collect();
            cells.push(row.id.to_string());
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    if rows.is_empty() {
        out.push_str("(no items)\n");
    }
    let _ = writeln!(out, "[{}]", view.add_action.label);
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_is_hidden_sibling() {
        assert_eq!(tmp_path(Path::new("/data/field.json")), PathBuf::from("/data/.field.json.tmp"));
    }
}
