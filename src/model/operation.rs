use super::Operand;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary arithmetic operators applicable to two resolved operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    None,
    Add,
    Subtract,
    Multiply,
    Divide,
    Percentage,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::None => "·",
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Percentage => "%",
        };
        write!(f, "{}", symbol)
    }
}

/// One binary arithmetic step within a calculation's operation list.
///
/// `operator` combines `value1` and `value2`. `next_operator` records the
/// chaining operator the editor shows between this step and the next; the
/// evaluator folds the list in order using each step's own `operator` and
/// never consults `next_operator` (the list is reduced by summing each
/// step's independent result, see [`crate::engine::Engine::compute`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub id: String,
    pub operator: Operator,
    pub next_operator: Option<Operator>,
    pub value1: Operand,
    pub value2: Operand,
}

impl Operation {
    pub fn new(id: impl Into<String>, operator: Operator, value1: Operand, value2: Operand) -> Self {
        Self {
            id: id.into(),
            operator,
            next_operator: None,
            value1,
            value2,
        }
    }
}
