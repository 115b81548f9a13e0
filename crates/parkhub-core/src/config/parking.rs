//! Parking lot layout and tariff configuration.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::types::Category;

/// Slot layout and pricing for the parking lot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingConfig {
    /// Slot names per category, in the order they are handed out.
    ///
    /// A category may be absent or empty; requests for it simply find no
    /// free slot.
    #[serde(default = "default_slots")]
    pub slots: BTreeMap<Category, Vec<String>>,
    /// Tariff per requested category.
    #[serde(default = "default_tariffs")]
    pub tariffs: BTreeMap<Category, TariffConfig>,
}

/// Fee schedule for one category.
///
/// The amount owed is `base_fee + hourly_rate * whole_hours_parked`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TariffConfig {
    /// Flat fee charged for every ticket.
    #[serde(default)]
    pub base_fee: f64,
    /// Fee per whole hour elapsed since the ticket was issued.
    #[serde(default)]
    pub hourly_rate: f64,
}

impl ParkingConfig {
    /// Check the layout and tariffs for values the allocator cannot honour.
    ///
    /// Slot names must be unique within a category, and tariff values must
    /// be finite and non-negative.
    pub fn validate(&self) -> Result<(), AppError> {
        for (category, names) in &self.slots {
            let mut seen = HashSet::with_capacity(names.len());
            for name in names {
                if name.trim().is_empty() {
                    return Err(AppError::configuration(format!(
                        "Empty slot name in category '{category}'"
                    )));
                }
                if !seen.insert(name.as_str()) {
                    return Err(AppError::configuration(format!(
                        "Duplicate slot '{name}' in category '{category}'"
                    )));
                }
            }
        }

        for (category, tariff) in &self.tariffs {
            for (field, value) in [
                ("base_fee", tariff.base_fee),
                ("hourly_rate", tariff.hourly_rate),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(AppError::configuration(format!(
                        "Tariff {field} for '{category}' must be a non-negative number, got {value}"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Total number of configured slots across all categories.
    pub fn capacity(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }
}

impl Default for ParkingConfig {
    fn default() -> Self {
        Self {
            slots: default_slots(),
            tariffs: default_tariffs(),
        }
    }
}

fn default_slots() -> BTreeMap<Category, Vec<String>> {
    BTreeMap::from([
        (Category::Primary, vec!["A".to_string()]),
        (Category::SecondaryCompatible, vec!["B".to_string()]),
        (Category::TertiaryCompatible, vec!["C".to_string()]),
    ])
}

fn default_tariffs() -> BTreeMap<Category, TariffConfig> {
    let flat = |base_fee| TariffConfig {
        base_fee,
        hourly_rate: 0.0,
    };
    BTreeMap::from([
        (Category::Primary, flat(20.0)),
        (Category::SecondaryCompatible, flat(10.0)),
        (Category::TertiaryCompatible, flat(5.0)),
    ])
}
