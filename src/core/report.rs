//! Dashboard and display helpers for the product catalog.
//!
//! This module aggregates the catalog into a dashboard summary and formats
//! amounts for presentation. Stored products keep their original currency;
//! conversion into the display currency happens here, at the presentation
//! edge, and never inside the pricing core. All functions return structured
//! data or plain strings that a host UI can render directly.

use crate::{
    config::currencies,
    core::{pricing::round_to_tenth, product},
    errors::{Error, Result},
};
use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

/// Conventional profit goal for the break-even advisory.
pub const DEFAULT_PROFIT_GOAL: f64 = 1000.0;

/// Window for counting a product as "recent" on the dashboard.
const RECENT_WINDOW_DAYS: i64 = 7;

/// Aggregate catalog statistics for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// Number of active products in the catalog
    pub total_products: usize,
    /// Combined selling price of the catalog, in the display currency
    pub total_value: f64,
    /// Mean profit margin across products, rounded to one decimal
    pub average_margin: f64,
    /// Products created within the last 7 days
    pub recent_count: usize,
}

/// Computes the dashboard summary over all active products.
///
/// Each product's selling price is converted from its stored currency into
/// `display_currency` before summing.
///
/// # Errors
/// Returns [`Error::UnknownCurrency`] if `display_currency` or any stored
/// product currency is not in the currency table, or an error if the
/// database query fails.
pub async fn generate_dashboard_summary(
    db: &DatabaseConnection,
    display_currency: &str,
) -> Result<DashboardSummary> {
    if currencies::get(display_currency).is_none() {
        return Err(Error::UnknownCurrency {
            code: display_currency.to_string(),
        });
    }

    let products = product::get_all_active_products(db).await?;

    let mut total_value = 0.0;
    for p in &products {
        total_value += currencies::convert(p.selling_price, &p.currency, display_currency)?;
    }

    // Cast safety: product counts are far below f64's integer range.
    #[allow(clippy::cast_precision_loss)]
    let average_margin = if products.is_empty() {
        0.0
    } else {
        round_to_tenth(
            products
                .iter()
                .map(|p| p.profit_margin_percentage)
                .sum::<f64>()
                / products.len() as f64,
        )
    };

    let week_ago = Utc::now().naive_utc() - Duration::days(RECENT_WINDOW_DAYS);
    let recent_count = products.iter().filter(|p| p.created_at > week_ago).count();

    Ok(DashboardSummary {
        total_products: products.len(),
        total_value,
        average_margin,
        recent_count,
    })
}

/// Formats an amount with a currency symbol, e.g. `"₱35.10"`.
#[must_use]
pub fn format_price(symbol: &str, amount: f64) -> String {
    format!("{symbol}{amount:.2}")
}

/// Generates a one-line catalog summary for a product, with its price
/// converted into the display currency.
///
/// # Errors
/// Returns [`Error::UnknownCurrency`] if either currency code is unknown.
pub fn format_product_summary(p: &crate::entities::ProductModel, display_currency: &str) -> Result<String> {
    let info = currencies::get(display_currency).ok_or_else(|| Error::UnknownCurrency {
        code: display_currency.to_string(),
    })?;
    let selling_price = currencies::convert(p.selling_price, &p.currency, display_currency)?;
    let profit = currencies::convert(p.profit, &p.currency, display_currency)?;

    Ok(format!(
        "{} | {} | profit {} | {:.1}% margin",
        p.name,
        format_price(info.symbol, selling_price),
        format_price(info.symbol, profit),
        p.profit_margin_percentage
    ))
}

/// Formats the break-even advisory: how many units to sell to reach the
/// profit goal, or a note that the goal is unreachable at a loss.
#[must_use]
pub fn format_break_even_insight(symbol: &str, target_profit: f64, units: Option<u64>) -> String {
    match units {
        Some(units) => format!(
            "To make {} profit, sell approximately {units} units",
            format_price(symbol, target_profit)
        ),
        None => format!(
            "A {} profit goal is unreachable: the product sells at or below cost",
            format_price(symbol, target_profit)
        ),
    }
}
