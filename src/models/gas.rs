use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority tier at which a transaction can be priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Safe,
    Average,
    Fast,
}

impl Tier {
    /// Display order: slowest to fastest.
    pub const ALL: [Tier; 3] = [Tier::Safe, Tier::Average, Tier::Fast];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Safe => "safe",
            Tier::Average => "average",
            Tier::Fast => "fast",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Safe => "Safe",
            Tier::Average => "Average",
            Tier::Fast => "Fast",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current gas prices in gwei, one per tier. A price of 0.0 is the sentinel
/// for "unavailable", never a real price; downstream flags those entries
/// instead of computing a zero cost.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GasPriceSet {
    pub safe: f64,
    pub average: f64,
    pub fast: f64,
}

impl GasPriceSet {
    /// Fail-safe default returned on any fetch failure.
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn get(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Safe => self.safe,
            Tier::Average => self.average,
            Tier::Fast => self.fast,
        }
    }

    /// True when every tier is the unavailable sentinel.
    pub fn is_unavailable(&self) -> bool {
        self.safe == 0.0 && self.average == 0.0 && self.fast == 0.0
    }
}
