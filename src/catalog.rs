//! Read-only collaborator interfaces the engine evaluates against: the
//! admin's field catalog and the end user's submitted form data.

use crate::model::{Calculation, FieldId, InputField, LogicField};
use ahash::AHashMap;

/// End-user-submitted values, keyed by field id.
///
/// Values are always raw strings; the engine does its own parsing and
/// never assumes pre-typed input. The trait seam exists so callers (and
/// tests) can instrument or lazily source the lookups.
pub trait FormValues {
    fn raw(&self, field_id: &str) -> Option<&str>;
}

impl FormValues for AHashMap<FieldId, String> {
    fn raw(&self, field_id: &str) -> Option<&str> {
        self.get(field_id).map(String::as_str)
    }
}

impl<T: FormValues + ?Sized> FormValues for &T {
    fn raw(&self, field_id: &str) -> Option<&str> {
        (*self).raw(field_id)
    }
}

/// A read-only snapshot of the admin-defined fields available to one
/// evaluation: input fields, logic fields, and the calculations owned by
/// them (keyed by the owning field's id).
#[derive(Debug, Clone, Default)]
pub struct FieldCatalog {
    fields: AHashMap<FieldId, InputField>,
    logic_fields: AHashMap<FieldId, LogicField>,
    calculations: AHashMap<FieldId, Calculation>,
}

impl FieldCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: InputField) -> Self {
        self.fields.insert(field.id.clone(), field);
        self
    }

    pub fn with_logic_field(mut self, field: LogicField) -> Self {
        self.logic_fields.insert(field.id.clone(), field);
        self
    }

    /// Attaches a calculation under its owning logic field's id. A derived
    /// variable field (miles, price range) may also own one, keyed by the
    /// input field's id.
    pub fn with_calculation(mut self, calculation: Calculation) -> Self {
        self.calculations
            .insert(calculation.logic_id().to_string(), calculation);
        self
    }

    pub fn field(&self, id: &str) -> Option<&InputField> {
        self.fields.get(id)
    }

    pub fn logic_field(&self, id: &str) -> Option<&LogicField> {
        self.logic_fields.get(id)
    }

    /// The calculation owned by the given field or logic field, if any.
    pub fn calculation_for(&self, owner_id: &str) -> Option<&Calculation> {
        self.calculations.get(owner_id)
    }

    pub fn fields_by_id(&self) -> &AHashMap<FieldId, InputField> {
        &self.fields
    }

    pub fn logic_fields_by_id(&self) -> &AHashMap<FieldId, LogicField> {
        &self.logic_fields
    }
}
