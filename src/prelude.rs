//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types so callers can bring the core
//! API into scope with a single `use keisan::prelude::*;`.

// Evaluation
pub use crate::engine::{apply, Engine};

// Data model
pub use crate::model::{
    Branch, Branches, Calculation, ComparedValues, Comparison, Condition, ConditionTarget,
    FieldId, FieldType, InputField, LogicField, LogicalOperator, Operand, Operation, Operator,
};

// Collaborators
pub use crate::catalog::{FieldCatalog, FormValues};
pub use crate::store::{CalculationStore, StoredCalculation};

// Validation
pub use crate::validate::{validate_calculation, validate_operations, Validation, ValidationIssue};

// Error types
pub use crate::error::{EvaluationError, StoreError};
