/// Static currency table for display conversion
pub mod currencies;

/// Database configuration and connection management
pub mod database;

/// Pricing policy configuration loading from config.toml
pub mod pricing;
