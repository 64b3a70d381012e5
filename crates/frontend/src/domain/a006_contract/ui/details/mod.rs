//! Contract details (EditDetails MVVM)
//!
//! - model.rs: API calls
//! - view_model.rs: form state, validation, commands
//! - page.rs: Leptos component

mod model;
mod page;
mod view_model;

pub use page::ContractDetails;
