//! Configuration management for the Food Technology Class Management backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FTC_ prefix

use config::{ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::OrderStatus;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Scheduled job configuration
    pub schedule: ScheduleConfig,

    /// Restock detection configuration
    pub restock: RestockConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleConfig {
    /// How many days ahead the weekly shopping list looks
    pub lookahead_days: i64,

    /// How many days ahead the order reminder scan looks
    pub reminder_window_days: i64,

    /// Order statuses that contribute demand to the shopping list
    pub eligible_statuses: Vec<OrderStatus>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RestockConfig {
    /// Fraction of required demand at or below which stock is Low
    pub low_fraction: Decimal,

    /// Fraction of required demand at or below which stock is Very Low
    pub very_low_fraction: Decimal,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("FTC_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("schedule.lookahead_days", 7)?
            .set_default("schedule.reminder_window_days", 3)?
            .set_default("schedule.eligible_statuses", vec!["pending", "approved"])?
            .set_default("restock.low_fraction", 0.5)?
            .set_default("restock.very_low_fraction", 0.25)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FTC_ prefix)
            .add_source(
                Environment::with_prefix("FTC")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            lookahead_days: 7,
            reminder_window_days: 3,
            eligible_statuses: vec![OrderStatus::Pending, OrderStatus::Approved],
        }
    }
}

impl Default for RestockConfig {
    fn default() -> Self {
        Self {
            low_fraction: Decimal::new(5, 1),       // 0.5
            very_low_fraction: Decimal::new(25, 2), // 0.25
        }
    }
}
