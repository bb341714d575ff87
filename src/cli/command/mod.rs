pub mod catalog;
pub mod fetch;
pub mod links;

pub use catalog::{datasets, variables};
pub use fetch::fetch;
pub use links::links;
