//! Editor configuration derived from host instance parameters.
//!
//! Parsing is total: missing, falsy or oddly-typed parameters fall back to
//! their defaults instead of producing an error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw instance parameters as the host supplies them.
pub type InstanceParameters = Map<String, Value>;

/// Instance parameter names understood by the editor.
pub mod params {
    pub const VALUE_NAME: &str = "valueName";
    pub const VALUE_ONLY: &str = "valueOnly";
    pub const SELECT_NAME: &str = "selectName";
    pub const SELECT_OPTIONS: &str = "selectOptions";
    pub const VALUE_OPTIONS: &str = "valueOptions";
    pub const OPERATOR_OPTIONS: &str = "operatorOptions";
    pub const OPERATOR_NAME: &str = "operatorName";

    pub const ALL: [&str; 7] = [
        VALUE_NAME,
        VALUE_ONLY,
        SELECT_NAME,
        SELECT_OPTIONS,
        VALUE_OPTIONS,
        OPERATOR_OPTIONS,
        OPERATOR_NAME,
    ];
}

pub const DEFAULT_VALUE_NAME: &str = "Value";
pub const DEFAULT_SELECT_NAME: &str = "Options";
pub const DEFAULT_OPERATOR_NAME: &str = "Operator";
pub const DEFAULT_SELECT_OPTIONS: [&str; 2] = ["includes", "excludes"];

/// Rendering configuration, fixed for the lifetime of a mounted editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Label of the value column.
    pub value_name: String,
    /// Hide the key column.
    pub value_only: bool,
    /// Label of the key column.
    pub select_name: String,
    /// Choices offered for `key`.
    pub select_options: Vec<String>,
    /// Choices offered for `value`. Empty means free text.
    pub value_options: Vec<String>,
    /// Choices offered for `operator`. Empty means no operator column.
    pub operator_options: Vec<String>,
    /// Label of the operator column.
    pub operator_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            value_name: DEFAULT_VALUE_NAME.into(),
            value_only: false,
            select_name: DEFAULT_SELECT_NAME.into(),
            select_options: DEFAULT_SELECT_OPTIONS.iter().map(|s| s.to_string()).collect(),
            value_options: Vec::new(),
            operator_options: Vec::new(),
            operator_name: DEFAULT_OPERATOR_NAME.into(),
        }
    }
}

impl EditorConfig {
    /// Builds the configuration from raw instance parameters.
    pub fn from_parameters(parameters: &InstanceParameters) -> Self {
        let defaults = Self::default();
        Self {
            value_name: text_param(parameters, params::VALUE_NAME).unwrap_or(defaults.value_name),
            value_only: flag_param(parameters, params::VALUE_ONLY),
            select_name: text_param(parameters, params::SELECT_NAME)
                .unwrap_or(defaults.select_name),
            select_options: text_param(parameters, params::SELECT_OPTIONS)
                .map(|raw| parse_options(&raw))
                .unwrap_or(defaults.select_options),
            value_options: options_param(parameters, params::VALUE_OPTIONS),
            operator_options: options_param(parameters, params::OPERATOR_OPTIONS),
            operator_name: text_param(parameters, params::OPERATOR_NAME)
                .unwrap_or(defaults.operator_name),
        }
    }

    /// True when the operator column is rendered.
    pub fn has_operator_column(&self) -> bool {
        !self.operator_options.is_empty()
    }

    /// True when the value column offers choices instead of free text.
    pub fn has_value_choices(&self) -> bool {
        !self.value_options.is_empty()
    }
}

/// Splits a comma-separated option string.
///
/// Tokens are trimmed and empty tokens dropped. Order and duplicates are kept.
pub fn parse_options(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads a text parameter, treating falsy values as absent.
fn text_param(parameters: &InstanceParameters, name: &str) -> Option<String> {
    match parameters.get(name)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn flag_param(parameters: &InstanceParameters, name: &str) -> bool {
    match parameters.get(name) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "on"
        ),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

fn options_param(parameters: &InstanceParameters, name: &str) -> Vec<String> {
    text_param(parameters, name)
        .map(|raw| parse_options(&raw))
        .unwrap_or_default()
}
