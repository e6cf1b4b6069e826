// DataBudget - ui/panels/mod.rs

pub mod admin;
pub mod results;
pub mod search;
