use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unit prices of one ETH keyed by lowercase ISO currency code. An empty set
/// means the fetch failed outright, which callers must treat differently
/// from a present-but-zero price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateSet {
    rates: BTreeMap<String, f64>,
}

impl ExchangeRateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>, unit_price: f64) {
        self.rates.insert(code.into(), unit_price);
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Fill in codes from `other` that are not already present. Used to graft
    /// the usd pivot onto a non-usd fetch without clobbering target prices.
    pub fn merge_missing(&mut self, other: ExchangeRateSet) {
        for (code, price) in other.rates {
            self.rates.entry(code).or_insert(price);
        }
    }
}

impl FromIterator<(String, f64)> for ExchangeRateSet {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_distinct_from_zero_price() {
        let empty = ExchangeRateSet::new();
        assert!(empty.is_empty());
        assert_eq!(empty.get("usd"), None);

        let mut zero = ExchangeRateSet::new();
        zero.insert("usd", 0.0);
        assert!(!zero.is_empty());
        assert_eq!(zero.get("usd"), Some(0.0));
    }

    #[test]
    fn merge_missing_keeps_existing_entries() {
        let mut target = ExchangeRateSet::new();
        target.insert("eur", 2800.0);
        target.insert("usd", 3000.0);

        let mut pivot = ExchangeRateSet::new();
        pivot.insert("usd", 9999.0);

        target.merge_missing(pivot);
        assert_eq!(target.get("usd"), Some(3000.0));
        assert_eq!(target.get("eur"), Some(2800.0));
    }
}
