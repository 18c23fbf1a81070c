use crate::models::{GasPriceSet, Tier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Computed costs for one tier, at full precision. Fiat figures are rounded
/// to 2 decimals only at render time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostFigures {
    pub eth: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usd: Option<f64>,
    pub target: f64,
}

/// One row of the report. `costs` is `None` when the tier's gwei price or
/// the target unit price was the 0.0 sentinel; the entry is flagged rather
/// than computed as a zero cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    pub tier: Tier,
    pub gwei_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costs: Option<CostFigures>,
}

impl CostEntry {
    pub fn is_unavailable(&self) -> bool {
        self.costs.is_none()
    }
}

/// The assembled result of one request. Immutable after assembly; the watch
/// front end replaces its snapshot wholesale on each refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub target_currency: String,
    pub gas_prices: GasPriceSet,
    pub entries: Vec<CostEntry>,
    pub fetched_at: DateTime<Utc>,
}

impl Report {
    pub fn dual_currency(&self) -> bool {
        self.target_currency != "usd"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flagged_entry_has_no_costs() {
        let entry = CostEntry {
            tier: Tier::Fast,
            gwei_price: 0.0,
            costs: None,
        };
        assert!(entry.is_unavailable());
    }

    #[test]
    fn flagged_entry_serializes_without_cost_fields() {
        let entry = CostEntry {
            tier: Tier::Fast,
            gwei_price: 0.0,
            costs: None,
        };
        let json = serde_json::to_value(entry).unwrap();
        assert!(json.get("costs").is_none());
        assert_eq!(json["tier"], "fast");
    }
}
