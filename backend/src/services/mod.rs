//! Business logic services

pub mod orders;
pub mod restock;
pub mod shopping_list;
