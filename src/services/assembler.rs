use crate::error::ReportError;
use crate::models::{CostEntry, CostFigures, Report, Tier};
use crate::services::calculator;
use crate::services::{ExchangeService, GasOracleService};
use chrono::Utc;

/// Pivot currency for dual-currency reporting.
const PIVOT_CURRENCY: &str = "usd";

/// Composes the two fetchers and the calculator into one `Report`. Each call
/// produces an independent report; nothing is cached between calls.
pub struct ReportService {
    gas_oracle: GasOracleService,
    exchange: ExchangeService,
}

impl ReportService {
    pub fn new(gas_oracle: GasOracleService, exchange: ExchangeService) -> Self {
        Self {
            gas_oracle,
            exchange,
        }
    }

    pub async fn build_report(&self, gas_units: f64, currency: &str) -> Result<Report, ReportError> {
        let target = {
            let normalized = currency.trim().to_lowercase();
            if normalized.is_empty() {
                PIVOT_CURRENCY.to_string()
            } else {
                normalized
            }
        };

        let gas_prices = self.gas_oracle.fetch_gas_prices(None).await;
        let mut rates = self.exchange.fetch_eth_unit_prices(&target).await;

        // The one hard failure: without a unit price for the target currency
        // every cost figure is meaningless, so no report is assembled.
        if !rates.contains(&target) {
            tracing::error!("no ETH price for '{}', report not assembled", target);
            return Err(ReportError::PriceUnavailable { currency: target });
        }

        // Pivot policy: reuse the fetched mapping when the target already is
        // usd; otherwise one extra call pinned to usd enables the second fiat
        // column. A pivot failure degrades that column only.
        if target != PIVOT_CURRENCY && !rates.contains(PIVOT_CURRENCY) {
            rates.merge_missing(self.exchange.fetch_eth_unit_prices(PIVOT_CURRENCY).await);
        }

        let target_price = rates.get(&target).unwrap_or(0.0);
        let pivot_price = rates.get(PIVOT_CURRENCY).filter(|price| *price > 0.0);

        let entries = Tier::ALL
            .iter()
            .map(|&tier| {
                let gwei_price = gas_prices.get(tier);
                // A zero gwei or unit price means "unavailable": flag the
                // entry instead of computing a zero cost.
                let costs = if gwei_price == 0.0 || target_price == 0.0 {
                    None
                } else {
                    let (eth, target_cost) = calculator::cost(gas_units, gwei_price, target_price);
                    let usd = pivot_price
                        .map(|price| calculator::cost(gas_units, gwei_price, price).1);
                    Some(CostFigures {
                        eth,
                        usd,
                        target: target_cost,
                    })
                };
                CostEntry {
                    tier,
                    gwei_price,
                    costs,
                }
            })
            .collect();

        Ok(Report {
            target_currency: target,
            gas_prices,
            entries,
            fetched_at: Utc::now(),
        })
    }
}
