//! Food Technology Class Management - Backend core
//!
//! Aggregates student ingredient orders against storeroom stock to
//! produce shopping lists, tracks the order lifecycle, and provides the
//! entry points invoked by the external scheduler. Persistence is an
//! injected store abstraction; the surrounding platform owns routing,
//! authentication, and rendering.

pub mod config;
pub mod error;
pub mod jobs;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{AppError, AppResult};
