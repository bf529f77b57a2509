//! Cost model - Aggregates raw material purchases into a per-item cost.
//!
//! A material entry records a bulk purchase (a ream of cardstock, a roll of
//! vinyl) and how many finished items that purchase yields. Aggregation sums
//! the per-item cost across entries and applies the configured waste policy,
//! producing the material side of a [`CostBreakdown`]. Everything here is a
//! pure function of its inputs; the pricing engine completes the breakdown
//! with printing and labor overheads.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Unit of purchase for a raw material.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialUnit {
    /// Flat stock bought per sheet (cardstock, photo paper)
    Sheet,
    /// Individually counted items (frames, bottles, blanks)
    Piece,
    /// Continuous stock bought per roll (vinyl, canvas)
    Roll,
    /// Any other bulk unit (ink by volume, powder by weight)
    Bulk,
}

impl MaterialUnit {
    /// Production waste rate for this unit type, in percent.
    ///
    /// Cut-to-size units lose the most to offcuts; roll stock wastes less;
    /// bulk consumables the least.
    #[must_use]
    pub const fn waste_rate(self) -> f64 {
        match self {
            Self::Sheet | Self::Piece => 5.0,
            Self::Roll => 3.0,
            Self::Bulk => 2.0,
        }
    }
}

/// A single raw material purchase used in a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    /// Human-readable material name (e.g., "Glossy cardstock")
    pub name: String,
    /// Unit the material is purchased in
    pub unit: MaterialUnit,
    /// Total purchase cost for the batch
    pub cost: f64,
    /// Number of finished items the batch yields
    pub items_produced: u32,
}

impl MaterialEntry {
    /// Creates a new material entry.
    #[must_use]
    pub fn new(name: impl Into<String>, unit: MaterialUnit, cost: f64, items_produced: u32) -> Self {
        Self {
            name: name.into(),
            unit,
            cost,
            items_produced,
        }
    }

    /// Cost contributed to a single finished item.
    ///
    /// Only meaningful for valid entries; aggregation filters invalid ones
    /// before dividing, so `items_produced` is never zero there.
    #[must_use]
    pub fn cost_per_item(&self) -> f64 {
        self.cost / f64::from(self.items_produced)
    }

    /// Whether this entry participates in aggregation.
    ///
    /// An entry needs a non-empty name, a positive finite cost, and at least
    /// one item produced. Anything else is silently excluded rather than
    /// treated as an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.cost > 0.0
            && self.cost.is_finite()
            && self.items_produced > 0
    }
}

/// Waste adjustment policy applied during aggregation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WastePolicy {
    /// No waste adjustment; material cost is used as-is
    NoWaste,
    /// Each entry contributes its unit's waste rate; the blended percentage
    /// is the arithmetic mean across valid entries (not cost-weighted)
    UnitBased,
}

/// Per-item production cost, split into its components.
///
/// Invariant: `total_cost = adjusted_material_cost + printing_cost + labor_cost`,
/// and `adjusted_material_cost = material_cost_per_item * (1 + waste_percentage / 100)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Sum of per-item material costs over valid entries
    pub material_cost_per_item: f64,
    /// Blended waste percentage (0 when the waste policy is disabled)
    pub waste_percentage: f64,
    /// Material cost after the waste adjustment
    pub adjusted_material_cost: f64,
    /// Fixed printing overhead per item
    pub printing_cost: f64,
    /// Fixed labor overhead per item
    pub labor_cost: f64,
    /// Total production cost per item
    pub total_cost: f64,
}

impl CostBreakdown {
    /// Completes the breakdown with printing and labor overheads,
    /// recomputing the total.
    #[must_use]
    pub fn with_overhead(self, printing_cost: f64, labor_cost: f64) -> Self {
        let total_cost = self.adjusted_material_cost + printing_cost + labor_cost;
        Self {
            printing_cost,
            labor_cost,
            total_cost,
            ..self
        }
    }
}

/// Aggregates material entries into the material side of a [`CostBreakdown`].
///
/// Entries failing [`MaterialEntry::is_valid`] are excluded. The waste
/// percentage is derived from the policy: zero for [`WastePolicy::NoWaste`],
/// the unweighted mean of per-entry unit rates for
/// [`WastePolicy::UnitBased`]. Printing and labor are left at zero for the
/// pricing engine to fill in.
///
/// # Errors
/// Returns [`Error::InsufficientInput`] if no valid entries remain after
/// filtering.
pub fn aggregate(materials: &[MaterialEntry], waste_policy: WastePolicy) -> Result<CostBreakdown> {
    let valid: Vec<&MaterialEntry> = materials.iter().filter(|m| m.is_valid()).collect();

    if valid.is_empty() {
        return Err(Error::InsufficientInput);
    }

    let material_cost_per_item: f64 = valid.iter().map(|m| m.cost_per_item()).sum();

    // Cast safety: valid.len() is a small material count, well within f64 range.
    #[allow(clippy::cast_precision_loss)]
    let waste_percentage = match waste_policy {
        WastePolicy::NoWaste => 0.0,
        WastePolicy::UnitBased => {
            valid.iter().map(|m| m.unit.waste_rate()).sum::<f64>() / valid.len() as f64
        }
    };

    let adjusted_material_cost = material_cost_per_item * (1.0 + waste_percentage / 100.0);

    Ok(CostBreakdown {
        material_cost_per_item,
        waste_percentage,
        adjusted_material_cost,
        printing_cost: 0.0,
        labor_cost: 0.0,
        total_cost: adjusted_material_cost,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn entry(name: &str, unit: MaterialUnit, cost: f64, items: u32) -> MaterialEntry {
        MaterialEntry::new(name, unit, cost, items)
    }

    #[test]
    fn test_cost_per_item() {
        let material = entry("Cardstock", MaterialUnit::Sheet, 100.0, 50);
        assert_eq!(material.cost_per_item(), 2.0);
    }

    #[test]
    fn test_validity_rules() {
        assert!(entry("Vinyl", MaterialUnit::Roll, 250.0, 100).is_valid());

        // Empty and whitespace-only names are invalid
        assert!(!entry("", MaterialUnit::Sheet, 10.0, 5).is_valid());
        assert!(!entry("   ", MaterialUnit::Sheet, 10.0, 5).is_valid());

        // Non-positive or non-finite costs are invalid
        assert!(!entry("Ink", MaterialUnit::Bulk, 0.0, 5).is_valid());
        assert!(!entry("Ink", MaterialUnit::Bulk, -3.0, 5).is_valid());
        assert!(!entry("Ink", MaterialUnit::Bulk, f64::NAN, 5).is_valid());
        assert!(!entry("Ink", MaterialUnit::Bulk, f64::INFINITY, 5).is_valid());

        // Zero items produced is invalid, not a division by zero
        assert!(!entry("Frame", MaterialUnit::Piece, 10.0, 0).is_valid());
    }

    #[test]
    fn test_aggregate_empty_list() {
        let result = aggregate(&[], WastePolicy::NoWaste);
        assert!(matches!(result, Err(Error::InsufficientInput)));
    }

    #[test]
    fn test_aggregate_all_invalid_entries() {
        let materials = vec![
            entry("", MaterialUnit::Sheet, 100.0, 50),
            entry("Frame", MaterialUnit::Piece, 10.0, 0),
            entry("Ink", MaterialUnit::Bulk, -5.0, 10),
        ];

        let result = aggregate(&materials, WastePolicy::NoWaste);
        assert!(matches!(result, Err(Error::InsufficientInput)));
    }

    #[test]
    fn test_aggregate_excludes_invalid_entries() {
        let materials = vec![
            entry("Cardstock", MaterialUnit::Sheet, 100.0, 50),
            entry("Broken", MaterialUnit::Piece, 10.0, 0),
        ];

        let breakdown = aggregate(&materials, WastePolicy::NoWaste).unwrap();
        assert_eq!(breakdown.material_cost_per_item, 2.0);
    }

    #[test]
    fn test_aggregate_sums_cost_per_item() {
        let materials = vec![
            entry("Cardstock", MaterialUnit::Sheet, 100.0, 50),
            entry("Vinyl", MaterialUnit::Roll, 250.0, 100),
            entry("Ink", MaterialUnit::Bulk, 30.0, 60),
        ];

        let breakdown = aggregate(&materials, WastePolicy::NoWaste).unwrap();
        let expected: f64 = materials.iter().map(MaterialEntry::cost_per_item).sum();
        assert!((breakdown.material_cost_per_item - expected).abs() < TOLERANCE);
        assert!((breakdown.material_cost_per_item - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_no_waste_policy() {
        let materials = vec![entry("Cardstock", MaterialUnit::Sheet, 100.0, 50)];

        let breakdown = aggregate(&materials, WastePolicy::NoWaste).unwrap();
        assert_eq!(breakdown.waste_percentage, 0.0);
        assert_eq!(
            breakdown.adjusted_material_cost,
            breakdown.material_cost_per_item
        );
    }

    #[test]
    fn test_unit_based_waste_single_roll() {
        let materials = vec![entry("Vinyl", MaterialUnit::Roll, 250.0, 100)];

        let breakdown = aggregate(&materials, WastePolicy::UnitBased).unwrap();
        assert_eq!(breakdown.waste_percentage, 3.0);
        assert!((breakdown.adjusted_material_cost - 2.575).abs() < TOLERANCE);
    }

    #[test]
    fn test_unit_based_waste_is_unweighted_mean() {
        // Sheet (5%) and roll (3%) blend to 4% regardless of their costs
        let materials = vec![
            entry("Cardstock", MaterialUnit::Sheet, 1000.0, 10),
            entry("Vinyl", MaterialUnit::Roll, 1.0, 10),
        ];

        let breakdown = aggregate(&materials, WastePolicy::UnitBased).unwrap();
        assert_eq!(breakdown.waste_percentage, 4.0);
    }

    #[test]
    fn test_unit_based_waste_ignores_invalid_entries() {
        // The invalid sheet entry must not drag the mean toward 5%
        let materials = vec![
            entry("Vinyl", MaterialUnit::Roll, 250.0, 100),
            entry("", MaterialUnit::Sheet, 100.0, 50),
        ];

        let breakdown = aggregate(&materials, WastePolicy::UnitBased).unwrap();
        assert_eq!(breakdown.waste_percentage, 3.0);
    }

    #[test]
    fn test_waste_rates_per_unit() {
        assert_eq!(MaterialUnit::Sheet.waste_rate(), 5.0);
        assert_eq!(MaterialUnit::Piece.waste_rate(), 5.0);
        assert_eq!(MaterialUnit::Roll.waste_rate(), 3.0);
        assert_eq!(MaterialUnit::Bulk.waste_rate(), 2.0);
    }

    #[test]
    fn test_with_overhead_completes_total() {
        let materials = vec![entry("Cardstock", MaterialUnit::Sheet, 100.0, 50)];

        let breakdown = aggregate(&materials, WastePolicy::NoWaste)
            .unwrap()
            .with_overhead(5.0, 20.0);

        assert_eq!(breakdown.printing_cost, 5.0);
        assert_eq!(breakdown.labor_cost, 20.0);
        assert!(
            (breakdown.total_cost
                - (breakdown.adjusted_material_cost
                    + breakdown.printing_cost
                    + breakdown.labor_cost))
                .abs()
                < TOLERANCE
        );
        assert!((breakdown.total_cost - 27.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_material_entry_serde_round_trip() {
        let material = entry("Vinyl", MaterialUnit::Roll, 250.0, 100);
        let json = serde_json::to_string(&material).unwrap();
        assert!(json.contains("\"roll\""));

        let decoded: MaterialEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, material);
    }
}
