//! The table: deck generation and the covering state machine.
//!
//! - `generator`: deals type labels and builds the layered covering DAG
//! - `coverage`: derives `Covered`/`Clickable` from covering references

pub mod coverage;
pub mod generator;

pub use coverage::update_coverage;
pub use generator::CardGraphGenerator;
