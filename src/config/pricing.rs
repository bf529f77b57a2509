//! Pricing configuration loading from config.toml
//!
//! This module provides the pricing policy knobs that distinguish shop
//! variants: the waste policy, the optional price rounding increment, the
//! default overhead and markup values used to seed new calculations, and the
//! display currency. A missing file or section falls back to the defaults.

use crate::{
    config::currencies,
    core::{
        materials::WastePolicy,
        pricing::{Overhead, RoundingPolicy},
    },
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Pricing policy settings
    #[serde(default)]
    pub pricing: PricingSettings,
}

/// Pricing policy settings for the shop.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PricingSettings {
    /// Waste adjustment policy applied during cost aggregation
    pub waste_policy: WastePolicy,
    /// Round selling prices up to the next multiple of this increment;
    /// omit to keep raw marked-up prices
    pub rounding_increment: Option<f64>,
    /// Default printing overhead for new calculations
    pub default_printing_cost: f64,
    /// Default labor overhead for new calculations
    pub default_labor_cost: f64,
    /// Default markup percentage for new calculations
    pub default_markup_percentage: f64,
    /// Currency the dashboard and listings are displayed in
    pub display_currency: String,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            waste_policy: WastePolicy::NoWaste,
            rounding_increment: None,
            default_printing_cost: 5.0,
            default_labor_cost: 20.0,
            default_markup_percentage: 30.0,
            display_currency: "PHP".to_string(),
        }
    }
}

impl PricingSettings {
    /// The rounding policy these settings describe.
    #[must_use]
    pub fn rounding_policy(&self) -> RoundingPolicy {
        self.rounding_increment
            .map_or(RoundingPolicy::NoRounding, RoundingPolicy::NearestIncrement)
    }

    /// The default overhead pair for new calculations.
    #[must_use]
    pub const fn default_overhead(&self) -> Overhead {
        Overhead::new(self.default_printing_cost, self.default_labor_cost)
    }

    /// Checks the settings for values the engine would reject later.
    ///
    /// # Errors
    /// Returns [`Error::Config`] for a non-positive rounding increment and
    /// [`Error::UnknownCurrency`] for an unsupported display currency.
    pub fn validate(&self) -> Result<()> {
        if let Some(increment) = self.rounding_increment {
            if increment <= 0.0 || !increment.is_finite() {
                return Err(Error::Config {
                    message: format!("rounding_increment must be positive, got {increment}"),
                });
            }
        }

        if currencies::get(&self.display_currency).is_none() {
            return Err(Error::UnknownCurrency {
                code: self.display_currency.clone(),
            });
        }

        Ok(())
    }
}

/// Loads pricing configuration from a TOML file and validates it.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - The settings fail [`PricingSettings::validate`]
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    let config: Config = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    config.pricing.validate()?;
    Ok(config)
}

/// Loads pricing configuration from the default location (./config.toml)
///
/// # Errors
/// Same conditions as [`load_config`].
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}
