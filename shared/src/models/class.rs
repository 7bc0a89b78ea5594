//! Class section models

use serde::{Deserialize, Serialize};

/// A scheduled food-technology class section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassSection {
    pub id: String,
    pub name: String,
    pub day: String,
    pub time: String,
    /// Number of enrolled students
    pub students: u32,
    pub room: String,
    pub teacher: String,
}
