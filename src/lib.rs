//! # oinstec-forms - Dynamic Inspection Forms
//!
//! **oinstec-forms** evaluates the dynamic forms technicians fill in during
//! gas-cylinder and vehicle inspections. A form template is an ordered list of
//! field definitions; any field may carry a visibility rule that shows it only
//! when earlier answers satisfy a set of conditions.
//!
//! ## Core Workflow
//!
//! 1.  **Load a Template**: Parse a `FormTemplate` from JSON (`FormTemplate::from_json`
//!     or `from_file`). Run `template::lint` to catch authoring mistakes early.
//! 2.  **Collect Answers**: Keep the answers in an `AnswerMap`, or let a `FormSession`
//!     own them and notify you whenever visibility changes.
//! 3.  **Evaluate**: Call `visible_fields` to get the fields to display, in order.
//!     The evaluator is a pure function of template and answers and never fails.
//! 4.  **Validate & Render**: `validate_answers` checks only the visible fields;
//!     `render_text` draws them with one widget per field type.
//!
//! ## Quick Start
//!
//! ```rust
//! use oinstec_forms::prelude::*;
//!
//! let template = FormTemplate::new(
//!     "revision-gnv",
//!     "Revision GNV",
//!     vec![
//!         FieldDefinition::new("tiene_fuga", FieldType::Radio, 1).with_options(["si", "no"]),
//!         FieldDefinition::new("detalle_fuga", FieldType::Textarea, 2).with_rule(
//!             VisibilityRule::all(vec![Condition::new("tiene_fuga", Operator::Equals, "si")]),
//!         ),
//!     ],
//! );
//!
//! let mut answers = AnswerMap::new();
//! assert_eq!(visible_fields(&template, &answers).len(), 1);
//!
//! answers.set("tiene_fuga", "si");
//! let ids: Vec<_> = visible_fields(&template, &answers).iter().map(|f| f.id.as_str()).collect();
//! assert_eq!(ids, ["tiene_fuga", "detalle_fuga"]);
//! ```

pub mod answers;
pub mod error;
pub mod evaluator;
pub mod prelude;
pub mod render;
pub mod session;
pub mod template;
pub mod trace;
pub mod validate;
pub mod value;

pub use evaluator::{is_visible, visible_fields};
