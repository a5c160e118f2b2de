use rulefield_model::RecordField;
use serde::{Deserialize, Serialize};

use crate::EditorConfig;

/// How a column lets the author enter text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnControl {
    /// Plain text input.
    FreeText,
    /// Selection from a fixed option set, preceded by an empty placeholder.
    Choice { options: Vec<String> },
}

impl ColumnControl {
    /// Choice control over `options`.
    pub fn choice(options: &[String]) -> Self {
        Self::Choice {
            options: options.to_vec(),
        }
    }

    /// The entries a choice control offers, placeholder first.
    ///
    /// Free-text controls offer nothing.
    pub fn choices(&self) -> Vec<ChoiceOption> {
        match self {
            Self::FreeText => Vec::new(),
            Self::Choice { options } => std::iter::once(ChoiceOption::placeholder())
                .chain(options.iter().map(|o| ChoiceOption::new(o)))
                .collect(),
        }
    }
}

/// One entry in a choice control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(option: &str) -> Self {
        Self {
            value: option.to_string(),
            label: option.to_string(),
        }
    }

    /// The explicit empty entry every choice control starts with.
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: String::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// A rendered column: which field it edits, its header and its control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub field: RecordField,
    pub label: String,
    pub control: ColumnControl,
}

impl EditorConfig {
    /// Columns in display order: key (unless value-only), operator (when
    /// operator options exist), value.
    pub fn columns(&self) -> Vec<ColumnSpec> {
        let mut columns = Vec::with_capacity(3);
        if !self.value_only {
            columns.push(ColumnSpec {
                field: RecordField::Key,
                label: self.select_name.clone(),
                control: ColumnControl::choice(&self.select_options),
            });
        }
        if self.has_operator_column() {
            columns.push(ColumnSpec {
                field: RecordField::Operator,
                label: self.operator_name.clone(),
                control: ColumnControl::choice(&self.operator_options),
            });
        }
        columns.push(ColumnSpec {
            field: RecordField::Value,
            label: self.value_name.clone(),
            control: if self.has_value_choices() {
                ColumnControl::choice(&self.value_options)
            } else {
                ColumnControl::FreeText
            },
        });
        columns
    }
}
