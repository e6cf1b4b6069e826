// DataBudget - app/mod.rs
//
// Application layer: state management, offer persistence, admin editing.
// Dependencies: core layer.
// Must NOT depend on: ui.

pub mod admin;
pub mod state;
pub mod store;
