//! # Keisan - Form Calculation Engine
//!
//! **Keisan** evaluates admin-defined calculation logic against end-user
//! form submissions. Administrators describe input fields and attach
//! arithmetic chains or conditional if/then/else branches to named logic
//! fields; the engine folds those chains into a single number, resolving
//! field references against a catalog snapshot and a raw form-data map.
//!
//! ## Core Workflow
//!
//! 1. **Describe the fields**: build a [`catalog::FieldCatalog`] holding the
//!    admin's input fields, logic fields, and the calculations they own.
//! 2. **Build the logic**: construct calculations with the pure functions in
//!    [`edit`], or decode stored records through [`store`].
//! 3. **Validate**: run [`validate::validate_calculation`] in the editor to
//!    surface every reference and parse problem at once.
//! 4. **Evaluate**: create an [`engine::Engine`] over the catalog and the
//!    submitted form data and call `compute_calculation`. Evaluation is
//!    total: incomplete input yields `0`, never an error; the one fatal
//!    condition is a cyclic field reference.
//!
//! ## Quick Start
//!
//! ```rust
//! use keisan::prelude::*;
//! use ahash::AHashMap;
//!
//! fn main() -> Result<(), EvaluationError> {
//!     // The admin defines a numeric field and a calculation over it:
//!     // purchase price + 10% of purchase price.
//!     let catalog = FieldCatalog::new()
//!         .with_field(InputField::new("price", "Purchase price", FieldType::Number));
//!
//!     let operations = vec![
//!         Operation::new("op-1", Operator::Add, Operand::input("price"), Operand::number("0")),
//!         Operation::new(
//!             "op-2",
//!             Operator::Percentage,
//!             Operand::input("price"),
//!             Operand::number("10"),
//!         ),
//!     ];
//!
//!     // The end user submits the form; values arrive as raw strings.
//!     let mut form: AHashMap<String, String> = AHashMap::new();
//!     form.insert("price".to_string(), "20000".to_string());
//!
//!     let engine = Engine::new(&catalog, &form);
//!     let total = engine.compute(&operations)?;
//!     assert_eq!(total, 22000.0);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod edit;
pub mod engine;
pub mod error;
pub mod model;
pub mod prelude;
pub mod store;
pub mod validate;
