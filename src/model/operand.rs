use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for an input field or a logic field in the admin's catalog.
pub type FieldId = String;

/// One side of an arithmetic operation or a conditional comparison.
///
/// Exactly one kind is active at a time: a raw numeric literal as entered
/// by the admin, a reference to an end-user input field, or a reference to
/// another logic field's computed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operand {
    /// A fixed literal, kept as the raw string the admin typed.
    /// Parsed to a float at resolve time; unparseable literals resolve to 0.
    Number { value: String },
    /// A reference to an end-user input field. `None` while the editor has
    /// not picked a field yet; an unset reference resolves to 0.
    #[serde(rename_all = "camelCase")]
    Input { field_id: Option<FieldId> },
    /// A reference to another logic field's evaluated value.
    #[serde(rename_all = "camelCase")]
    Logic { logic_id: FieldId },
}

impl Operand {
    /// The default operand the editor starts a new operation with.
    pub fn unset() -> Self {
        Operand::Input { field_id: None }
    }

    pub fn number(value: impl Into<String>) -> Self {
        Operand::Number {
            value: value.into(),
        }
    }

    pub fn input(field_id: impl Into<FieldId>) -> Self {
        Operand::Input {
            field_id: Some(field_id.into()),
        }
    }

    pub fn logic(logic_id: impl Into<FieldId>) -> Self {
        Operand::Logic {
            logic_id: logic_id.into(),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Number { value } => write!(f, "{}", value),
            Operand::Input {
                field_id: Some(id),
            } => write!(f, "${}", id),
            Operand::Input { field_id: None } => write!(f, "$<unset>"),
            Operand::Logic { logic_id } => write!(f, "@{}", logic_id),
        }
    }
}
