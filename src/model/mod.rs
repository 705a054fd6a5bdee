//! The canonical data model for admin-defined calculations: operands,
//! operations, conditions, calculations and the field catalog entries they
//! reference. Everything here is `serde`-derived so editor payloads and
//! stored records share one shape.

pub mod calculation;
pub mod condition;
pub mod field;
pub mod operand;
pub mod operation;

pub use calculation::*;
pub use condition::*;
pub use field::*;
pub use operand::*;
pub use operation::*;
