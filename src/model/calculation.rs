use super::{Condition, FieldId, Operand, Operation};
use serde::{Deserialize, Serialize};

/// The two operands a conditional calculation's legacy single comparison
/// runs against. Kept in the model and the encoded record so older editor
/// payloads round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparedValues {
    pub value1: Operand,
    pub value2: Operand,
}

/// The then/else operation lists of a conditional calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branches {
    pub then_ops: Vec<Operation>,
    pub else_ops: Vec<Operation>,
}

/// Selects one of a conditional calculation's two operation lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Then,
    Else,
}

/// A complete admin-defined calculation, owned by exactly one logic field.
///
/// `Simple` folds a single operation list to a number. `Conditional`
/// evaluates its condition list to a boolean and folds the chosen branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Calculation {
    #[serde(rename_all = "camelCase")]
    Simple {
        id: String,
        logic_id: FieldId,
        operations: Vec<Operation>,
    },
    #[serde(rename_all = "camelCase")]
    Conditional {
        id: String,
        logic_id: FieldId,
        compared_values: ComparedValues,
        conditions: Vec<Condition>,
        branches: Branches,
    },
}

impl Calculation {
    /// The id of the logic field this calculation is owned by.
    pub fn logic_id(&self) -> &str {
        match self {
            Calculation::Simple { logic_id, .. } => logic_id,
            Calculation::Conditional { logic_id, .. } => logic_id,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Calculation::Simple { id, .. } => id,
            Calculation::Conditional { id, .. } => id,
        }
    }
}
