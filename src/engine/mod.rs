//! The calculation engine: folds an admin-defined operation list into one
//! number against a field catalog and a submitted form-data map.
//!
//! An [`Engine`] borrows its catalog and form data and is cheap to
//! construct. Every top-level `compute*` call creates a fresh
//! [`EvalContext`](context::EvalContext), so memoized field values never
//! outlive a single invocation and two back-to-back evaluations cannot
//! see each other's cache.

use crate::catalog::{FieldCatalog, FormValues};
use crate::error::EvaluationError;
use crate::model::{Calculation, Operation};

mod conditions;
mod context;
mod ops;
mod resolver;

pub use ops::apply;

use context::EvalContext;

/// Evaluates operation lists and calculations against one catalog/form
/// snapshot.
pub struct Engine<'a, F: FormValues> {
    catalog: &'a FieldCatalog,
    form: &'a F,
}

impl<'a, F: FormValues> Engine<'a, F> {
    pub fn new(catalog: &'a FieldCatalog, form: &'a F) -> Self {
        Self { catalog, form }
    }

    /// Reduces an operation list to a single number.
    ///
    /// Each operation is resolved independently against its own two
    /// operands and the partial results are summed in list order; the
    /// aggregate is never threaded into a later operation as an operand.
    /// An empty list is `0`.
    pub fn compute(&self, operations: &[Operation]) -> Result<f64, EvaluationError> {
        let mut ctx = EvalContext::new();
        self.fold_operations(operations, &mut ctx)
    }

    /// Evaluates a full calculation: a simple one folds its operation
    /// list, a conditional one evaluates its conditions and folds the
    /// chosen branch.
    pub fn compute_calculation(&self, calculation: &Calculation) -> Result<f64, EvaluationError> {
        let mut ctx = EvalContext::new();
        self.compute_calculation_with(calculation, &mut ctx)
    }

    /// Accepts an operation list in its serialized JSON form, as stored by
    /// the persistence layer, and computes it.
    pub fn compute_serialized(&self, operations_json: &str) -> Result<f64, EvaluationError> {
        let operations: Vec<Operation> = serde_json::from_str(operations_json)
            .map_err(|e| EvaluationError::InvalidOperations(e.to_string()))?;
        self.compute(&operations)
    }

    /// The evaluated value of one logic field, as other calculations see
    /// it through a `Logic` operand reference.
    pub fn logic_value(&self, logic_id: &str) -> Result<f64, EvaluationError> {
        let mut ctx = EvalContext::new();
        self.resolve_field(context::CacheKey::Logic(logic_id.to_string()), &mut ctx)
    }

    /// Whether a conditional calculation's conditions currently select the
    /// `then` branch. Always true for a simple calculation.
    pub fn calculation_takes_then(
        &self,
        calculation: &Calculation,
    ) -> Result<bool, EvaluationError> {
        match calculation {
            Calculation::Simple { .. } => Ok(true),
            Calculation::Conditional { conditions, .. } => {
                let mut ctx = EvalContext::new();
                self.evaluate_conditions(conditions, &mut ctx)
            }
        }
    }

    pub(crate) fn compute_calculation_with(
        &self,
        calculation: &Calculation,
        ctx: &mut EvalContext,
    ) -> Result<f64, EvaluationError> {
        match calculation {
            Calculation::Simple { operations, .. } => self.fold_operations(operations, ctx),
            Calculation::Conditional {
                conditions,
                branches,
                ..
            } => {
                let branch = if self.evaluate_conditions(conditions, ctx)? {
                    &branches.then_ops
                } else {
                    &branches.else_ops
                };
                self.fold_operations(branch, ctx)
            }
        }
    }

    fn fold_operations(
        &self,
        operations: &[Operation],
        ctx: &mut EvalContext,
    ) -> Result<f64, EvaluationError> {
        let mut total = 0.0;
        for operation in operations {
            let v1 = self.resolve(&operation.value1, ctx)?;
            let v2 = self.resolve(&operation.value2, ctx)?;
            total += apply(operation.operator, v1, v2);
        }
        Ok(total)
    }
}
