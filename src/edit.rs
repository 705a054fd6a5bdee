//! Pure state-transition functions for building and editing calculation
//! chains. Each function returns a new version of the structure and never
//! mutates its input, so the editing UI can treat calculation state as a
//! value.
//!
//! Ids are generated once at add-time and never reused; updates replace
//! the entry with a matching id in place, removals filter it out, and
//! list order is preserved throughout.

use crate::model::{
    Branch, Branches, Calculation, ComparedValues, Comparison, Condition, ConditionTarget,
    FieldId, LogicalOperator, Operand, Operation, Operator,
};
use uuid::Uuid;

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// The operation the editor starts with: an addition of two unset field
/// references.
fn default_operation() -> Operation {
    Operation {
        id: fresh_id(),
        operator: Operator::Add,
        next_operator: None,
        value1: Operand::unset(),
        value2: Operand::unset(),
    }
}

fn default_condition() -> Condition {
    Condition {
        id: fresh_id(),
        field: FieldId::new(),
        target: ConditionTarget::Input,
        comparison: Comparison::Equals,
        value: String::new(),
        value2: None,
        logical_operator: LogicalOperator::And,
    }
}

/// Creates an empty simple calculation for a logic field, seeded with one
/// default operation.
pub fn new_simple_calculation(logic_id: impl Into<FieldId>) -> Calculation {
    Calculation::Simple {
        id: fresh_id(),
        logic_id: logic_id.into(),
        operations: vec![default_operation()],
    }
}

/// Creates an empty conditional calculation for a logic field, seeded with
/// one default condition and one default operation per branch.
pub fn new_conditional_calculation(logic_id: impl Into<FieldId>) -> Calculation {
    Calculation::Conditional {
        id: fresh_id(),
        logic_id: logic_id.into(),
        compared_values: ComparedValues {
            value1: Operand::unset(),
            value2: Operand::unset(),
        },
        conditions: vec![default_condition()],
        branches: Branches {
            then_ops: vec![default_operation()],
            else_ops: vec![default_operation()],
        },
    }
}

/// Replaces the calculation with a matching id within a logic field's
/// calculation list; a no-op when the id is not present.
pub fn update_calculation(calculations: &[Calculation], updated: Calculation) -> Vec<Calculation> {
    calculations
        .iter()
        .map(|c| {
            if c.id() == updated.id() {
                updated.clone()
            } else {
                c.clone()
            }
        })
        .collect()
}

/// Appends a default operation with a fresh id.
pub fn add_operation(operations: &[Operation]) -> Vec<Operation> {
    let mut next = operations.to_vec();
    next.push(default_operation());
    next
}

/// Replaces the operation with a matching id; a no-op when the id is not
/// present.
pub fn update_operation(operations: &[Operation], updated: Operation) -> Vec<Operation> {
    operations
        .iter()
        .map(|op| {
            if op.id == updated.id {
                updated.clone()
            } else {
                op.clone()
            }
        })
        .collect()
}

/// Filters out the operation with the given id.
pub fn remove_operation(operations: &[Operation], id: &str) -> Vec<Operation> {
    operations.iter().filter(|op| op.id != id).cloned().collect()
}

/// Appends a default condition with a fresh id.
pub fn add_condition(conditions: &[Condition]) -> Vec<Condition> {
    let mut next = conditions.to_vec();
    next.push(default_condition());
    next
}

/// Replaces the condition with a matching id; a no-op when the id is not
/// present.
pub fn update_condition(conditions: &[Condition], updated: Condition) -> Vec<Condition> {
    conditions
        .iter()
        .map(|c| if c.id == updated.id { updated.clone() } else { c.clone() })
        .collect()
}

/// Filters out the condition with the given id.
pub fn remove_condition(conditions: &[Condition], id: &str) -> Vec<Condition> {
    conditions.iter().filter(|c| c.id != id).cloned().collect()
}

/// Appends a default operation to one branch of a conditional calculation.
/// Simple calculations are returned unchanged.
pub fn add_branch_operation(calculation: &Calculation, branch: Branch) -> Calculation {
    map_branch(calculation, branch, |ops| add_operation(ops))
}

/// Replaces an operation by id inside one branch of a conditional
/// calculation.
pub fn update_branch_operation(
    calculation: &Calculation,
    branch: Branch,
    updated: Operation,
) -> Calculation {
    map_branch(calculation, branch, |ops| update_operation(ops, updated.clone()))
}

/// Removes an operation by id from one branch of a conditional
/// calculation.
pub fn remove_branch_operation(calculation: &Calculation, branch: Branch, id: &str) -> Calculation {
    map_branch(calculation, branch, |ops| remove_operation(ops, id))
}

fn map_branch(
    calculation: &Calculation,
    branch: Branch,
    f: impl Fn(&[Operation]) -> Vec<Operation>,
) -> Calculation {
    match calculation {
        Calculation::Simple { .. } => calculation.clone(),
        Calculation::Conditional {
            id,
            logic_id,
            compared_values,
            conditions,
            branches,
        } => {
            let branches = match branch {
                Branch::Then => Branches {
                    then_ops: f(&branches.then_ops),
                    else_ops: branches.else_ops.clone(),
                },
                Branch::Else => Branches {
                    then_ops: branches.then_ops.clone(),
                    else_ops: f(&branches.else_ops),
                },
            };
            Calculation::Conditional {
                id: id.clone(),
                logic_id: logic_id.clone(),
                compared_values: compared_values.clone(),
                conditions: conditions.clone(),
                branches,
            }
        }
    }
}
