// DataBudget - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod filter;
pub mod input;
pub mod model;
pub mod results;
