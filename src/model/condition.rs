use super::FieldId;
use serde::{Deserialize, Serialize};

/// Comparison operators usable inside a conditional calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Comparison {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    /// Inclusive range check: `value <= x <= value2`.
    Between,
}

/// How sequential condition results are combined, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogicalOperator {
    And,
    Or,
}

/// Which catalog the condition's `field` id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionTarget {
    Input,
    Logic,
}

/// One boolean comparison step within a conditional calculation.
///
/// The field's current value is resolved from the submitted form data (or
/// from the referenced logic field's evaluated value) and compared against
/// `value`, with `value2` carrying the upper bound for `Between`. Each
/// condition's `logical_operator` joins it to the running result of the
/// conditions before it; the first condition's operator is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub id: String,
    pub field: FieldId,
    pub target: ConditionTarget,
    pub comparison: Comparison,
    pub value: String,
    pub value2: Option<String>,
    pub logical_operator: LogicalOperator,
}
