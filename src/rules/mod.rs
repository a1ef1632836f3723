//! Game rules: selecting cards and resolving matches.
//!
//! Rule functions take the session state explicitly and never hold on to
//! it; the environment decides when to call them.

pub mod selection;

pub use selection::{select, StepKind};
