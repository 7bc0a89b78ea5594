//! Domain models for the Food Technology Class Management system

mod class;
mod inventory;
mod notification;
mod order;
mod recipe;
mod shopping_list;
mod user;

pub use class::*;
pub use inventory::*;
pub use notification::*;
pub use order::*;
pub use recipe::*;
pub use shopping_list::*;
pub use user::*;
