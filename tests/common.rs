//! Common test utilities for building catalogs, operations and form data.
use ahash::AHashMap;
use keisan::prelude::*;
use std::cell::RefCell;

/// Builds a form-data map from raw string pairs.
#[allow(dead_code)]
pub fn form(entries: &[(&str, &str)]) -> AHashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Shorthand operation constructor with an explicit id.
#[allow(dead_code)]
pub fn op(id: &str, operator: Operator, value1: Operand, value2: Operand) -> Operation {
    Operation::new(id, operator, value1, value2)
}

/// A catalog with the numeric fields most tests need.
#[allow(dead_code)]
pub fn price_catalog() -> FieldCatalog {
    FieldCatalog::new()
        .with_field(InputField::new("price", "Purchase price", FieldType::Number))
        .with_field(InputField::new("shipping", "Shipping cost", FieldType::Number))
        .with_field(InputField::new("age", "Vehicle age", FieldType::Number))
        .with_field(InputField::new("notes", "Notes", FieldType::Text))
}

/// Form data wrapper that counts how many times each field is read, to
/// observe the engine's per-invocation memoization.
#[allow(dead_code)]
pub struct CountingForm {
    inner: AHashMap<String, String>,
    reads: RefCell<AHashMap<String, usize>>,
}

#[allow(dead_code)]
impl CountingForm {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            inner: form(entries),
            reads: RefCell::new(AHashMap::new()),
        }
    }

    pub fn reads_of(&self, field_id: &str) -> usize {
        self.reads.borrow().get(field_id).copied().unwrap_or(0)
    }
}

impl FormValues for CountingForm {
    fn raw(&self, field_id: &str) -> Option<&str> {
        *self
            .reads
            .borrow_mut()
            .entry(field_id.to_string())
            .or_insert(0) += 1;
        self.inner.get(field_id).map(String::as_str)
    }
}

/// A default-shaped condition for tests.
#[allow(dead_code)]
pub fn condition(
    id: &str,
    field: &str,
    comparison: Comparison,
    value: &str,
    value2: Option<&str>,
    logical_operator: LogicalOperator,
) -> Condition {
    Condition {
        id: id.to_string(),
        field: field.to_string(),
        target: ConditionTarget::Input,
        comparison,
        value: value.to_string(),
        value2: value2.map(str::to_string),
        logical_operator,
    }
}
