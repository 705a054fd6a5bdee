use super::FieldId;
use serde::{Deserialize, Serialize};

/// The kind of input control an admin-defined field renders as.
///
/// `Miles` and `PriceRange` are the derived "variable" field kinds: their
/// values come from admin-maintained lookup tables, and they usually carry
/// a calculation in the catalog rather than a directly typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    Number,
    Text,
    Select,
    Checkbox,
    Miles,
    PriceRange,
}

impl FieldType {
    /// Whether values of this field are eligible as arithmetic operands.
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Number)
    }
}

/// An end-user-facing form field as defined by the admin.
///
/// The engine only reads `id` and `field_type`; the rest is carried for
/// the form-rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputField {
    pub id: FieldId,
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
    pub enabled: bool,
    #[serde(default)]
    pub options: Vec<String>,
}

impl InputField {
    pub fn new(id: impl Into<FieldId>, name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            field_type,
            required: false,
            enabled: true,
            options: Vec::new(),
        }
    }
}

/// A named, admin-defined computed value usable as an operand in other
/// calculations via [`Operand::Logic`](super::Operand::Logic) references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicField {
    pub id: FieldId,
    pub name: String,
    pub field_type: FieldType,
    pub related_field: Option<FieldId>,
    pub relation_type: Option<String>,
}

impl LogicField {
    pub fn new(id: impl Into<FieldId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            field_type: FieldType::Number,
            related_field: None,
            relation_type: None,
        }
    }
}
