//! Menu tree materialization.
//!
//! Each menu node becomes a directory and is recorded under its hierarchical
//! category key so shortcuts can be placed by category later on.

mod builder;
mod category;

pub use builder::build_menus;
pub use category::{category_key, CategoryMap};
