//! Slot category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// The kind of parking slot, and the kind of slot a car asks for.
///
/// Categories are totally ordered: `Primary < SecondaryCompatible <
/// TertiaryCompatible`. The order drives fallback probing and keeps
/// iteration over per-category maps deterministic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Gasoline cars. Flexible: may be parked in any compatible slot.
    Primary,
    /// 20 kW electric charging slot. Restricted to its own slot type.
    SecondaryCompatible,
    /// 50 kW electric charging slot. Restricted to its own slot type.
    TertiaryCompatible,
}

impl Category {
    /// Every category, in ascending order.
    pub const ALL: [Category; 3] = [
        Self::Primary,
        Self::SecondaryCompatible,
        Self::TertiaryCompatible,
    ];

    /// Whether a request for this category may be served by slots of
    /// other categories.
    pub fn is_flexible(&self) -> bool {
        matches!(self, Self::Primary)
    }

    /// The slot categories probed, in order, when serving a request for
    /// this category.
    pub fn fallback_order(&self) -> &'static [Category] {
        match self {
            Self::Primary => &Self::ALL,
            Self::SecondaryCompatible => &[Self::SecondaryCompatible],
            Self::TertiaryCompatible => &[Self::TertiaryCompatible],
        }
    }

    /// Return the category as its canonical snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::SecondaryCompatible => "secondary_compatible",
            Self::TertiaryCompatible => "tertiary_compatible",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    /// Accepts the canonical names as well as the engine-type aliases
    /// (`gas`, `electric`, `hi_electric`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" | "gas" => Ok(Self::Primary),
            "secondary_compatible" | "electric" => Ok(Self::SecondaryCompatible),
            "tertiary_compatible" | "hi_electric" => Ok(Self::TertiaryCompatible),
            _ => Err(AppError::validation(format!(
                "Invalid category: '{s}'. Expected one of: primary, secondary_compatible, tertiary_compatible"
            ))),
        }
    }
}
