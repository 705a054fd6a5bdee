//! Pre-flight validation of an operation chain against the field catalog
//! and the currently submitted form data.
//!
//! Validation never throws: every problem across every operation is
//! collected into one structured list so the editor can surface all of
//! them at once. Live evaluation stays total and silent (coercing to 0);
//! this is the only place reference and parse failures become visible.

use crate::catalog::{FieldCatalog, FormValues};
use crate::engine::Engine;
use crate::error::EvaluationError;
use crate::model::{Calculation, Operand, Operation, Operator};
use itertools::Itertools;

/// Parses a raw value for normalization. `None` for anything that is not
/// a finite number: Rust happily parses "NaN" and "inf", which must count
/// as invalid here and coerce to 0 during live evaluation.
fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// One problem found in an operation chain, addressed to the editor UI.
/// `field` is the referenced field id where one exists, otherwise the
/// owning operation's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

/// An operation with both operands resolved to numbers, ready for direct
/// evaluation without further lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOperation {
    pub operator: Operator,
    pub value1: f64,
    pub value2: f64,
}

/// Outcome of validating an operation chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Valid { operations: Vec<ResolvedOperation> },
    Invalid { errors: Vec<ValidationIssue> },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid { .. })
    }

    /// A one-line rendering of all issues, for logs and CLI output.
    pub fn summary(&self) -> String {
        match self {
            Validation::Valid { operations } => {
                format!("valid ({} operations)", operations.len())
            }
            Validation::Invalid { errors } => errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .join("; "),
        }
    }
}

/// Validates a single operation list per the editor contract.
pub fn validate_operations(
    operations: &[Operation],
    catalog: &FieldCatalog,
    form: &impl FormValues,
) -> Validation {
    let mut errors = Vec::new();
    let mut resolved = Vec::with_capacity(operations.len());

    for operation in operations {
        let v1 = check_operand(&operation.value1, operation, catalog, form, &mut errors);
        let v2 = check_operand(&operation.value2, operation, catalog, form, &mut errors);
        if let (Some(v1), Some(v2)) = (v1, v2) {
            resolved.push(ResolvedOperation {
                operator: operation.operator,
                value1: v1,
                value2: v2,
            });
        }
    }

    if errors.is_empty() {
        Validation::Valid {
            operations: resolved,
        }
    } else {
        Validation::Invalid { errors }
    }
}

/// Validates a whole calculation. A conditional calculation has both of
/// its branches checked; when everything is valid the returned normalized
/// list is the branch its conditions currently select.
pub fn validate_calculation(
    calculation: &Calculation,
    catalog: &FieldCatalog,
    form: &impl FormValues,
) -> Validation {
    match calculation {
        Calculation::Simple { operations, .. } => validate_operations(operations, catalog, form),
        Calculation::Conditional { branches, .. } => {
            let then = validate_operations(&branches.then_ops, catalog, form);
            let els = validate_operations(&branches.else_ops, catalog, form);
            match (then, els) {
                (Validation::Valid { operations: t }, Validation::Valid { operations: e }) => {
                    let engine = Engine::new(catalog, form);
                    match engine.calculation_takes_then(calculation) {
                        Ok(true) => Validation::Valid { operations: t },
                        Ok(false) => Validation::Valid { operations: e },
                        // Condition evaluation only fails on cycles; report
                        // it the same way a cyclic logic operand would be.
                        Err(err) => {
                            let field = match err {
                                EvaluationError::CyclicReference { id } => id,
                                _ => calculation.logic_id().to_string(),
                            };
                            Validation::Invalid {
                                errors: vec![ValidationIssue {
                                    field,
                                    message: "Cyclic field reference".to_string(),
                                }],
                            }
                        }
                    }
                }
                (then, els) => {
                    let mut errors = Vec::new();
                    if let Validation::Invalid { errors: e } = then {
                        errors.extend(e);
                    }
                    if let Validation::Invalid { errors: e } = els {
                        errors.extend(e);
                    }
                    Validation::Invalid { errors }
                }
            }
        }
    }
}

fn check_operand(
    operand: &Operand,
    operation: &Operation,
    catalog: &FieldCatalog,
    form: &impl FormValues,
    errors: &mut Vec<ValidationIssue>,
) -> Option<f64> {
    match operand {
        Operand::Number { value } => match parse_finite(value) {
            Some(n) => Some(n),
            None => {
                errors.push(ValidationIssue {
                    field: operation.id.clone(),
                    message: "Invalid number value".to_string(),
                });
                None
            }
        },
        Operand::Input { field_id: None } => {
            errors.push(ValidationIssue {
                field: operation.id.clone(),
                message: "Field not found".to_string(),
            });
            None
        }
        Operand::Input {
            field_id: Some(id),
        } => {
            let Some(field) = catalog.field(id) else {
                errors.push(ValidationIssue {
                    field: id.clone(),
                    message: "Field not found".to_string(),
                });
                return None;
            };
            if !field.field_type.is_numeric() {
                errors.push(ValidationIssue {
                    field: id.clone(),
                    message: "Field must be of type number".to_string(),
                });
                return None;
            }
            match parse_finite(form.raw(id).unwrap_or("")) {
                Some(n) => Some(n),
                None => {
                    errors.push(ValidationIssue {
                        field: id.clone(),
                        message: "Invalid field value".to_string(),
                    });
                    None
                }
            }
        }
        Operand::Logic { logic_id } => {
            if catalog.logic_field(logic_id).is_none() {
                errors.push(ValidationIssue {
                    field: logic_id.clone(),
                    message: "Field not found".to_string(),
                });
                return None;
            }
            let engine = Engine::new(catalog, form);
            match engine.logic_value(logic_id) {
                Ok(n) => Some(n),
                Err(_) => {
                    errors.push(ValidationIssue {
                        field: logic_id.clone(),
                        message: "Cyclic field reference".to_string(),
                    });
                    None
                }
            }
        }
    }
}
