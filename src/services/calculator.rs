/// Gas cost of a transaction in ETH and one fiat currency. Pure unit
/// conversion: 1 gwei = 1e-9 ETH. No rounding here; the renderer rounds
/// fiat figures for display.
pub fn cost(gas_units: f64, gwei_price: f64, eth_unit_price: f64) -> (f64, f64) {
    let eth_cost = gas_units * gwei_price * 1e-9;
    let fiat_cost = eth_cost * eth_unit_price;
    (eth_cost, fiat_cost)
}
