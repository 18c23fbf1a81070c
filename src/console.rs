use crate::models::{Report, Tier};
use anyhow::Result;

/// Render the one-shot report: raw gwei listing, then the cost table. Fiat
/// figures are rounded to 2 decimals here and nowhere earlier.
pub fn print_report(report: &Report) {
    let target = report.target_currency.to_uppercase();

    println!("Current Gas Prices (Gwei):");
    for tier in Tier::ALL {
        println!("   {:<8}: {} Gwei", tier.label(), report.gas_prices.get(tier));
    }
    println!();

    if report.dual_currency() {
        println!(
            "{:<22} {:<16} {:<12} Cost ({})",
            "Speed",
            "Cost (ETH)",
            "Cost (USD)",
            target
        );
        for entry in &report.entries {
            let speed = format!("{} ({} Gwei)", entry.tier.label(), entry.gwei_price);
            match entry.costs {
                Some(costs) => {
                    let usd = costs
                        .usd
                        .map(|v| format!("${:.2}", v))
                        .unwrap_or_else(|| "N/A".to_string());
                    println!(
                        "{:<22} {:<16} {:<12} {} {:.2}",
                        speed,
                        format!("{:.6} ETH", costs.eth),
                        usd,
                        target,
                        costs.target
                    );
                }
                None => println!("{:<22} API Error", speed),
            }
        }
    } else {
        println!("{:<22} {:<16} {}", "Speed", "Cost (ETH)", "Cost (USD)");
        for entry in &report.entries {
            let speed = format!("{} ({} Gwei)", entry.tier.label(), entry.gwei_price);
            match entry.costs {
                Some(costs) => println!(
                    "{:<22} {:<16} ${:.2}",
                    speed,
                    format!("{:.6} ETH", costs.eth),
                    costs.target
                ),
                None => println!("{:<22} API Error", speed),
            }
        }
    }
}

/// Serialize the report the way the JSON surface exposes it.
pub fn print_json(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
