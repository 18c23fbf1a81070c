use serde_json::Value;

/// The single numeric-parsing policy for upstream fields: numbers pass
/// through, strings parse as f64 with a thousands-separator-stripping retry,
/// anything else coerces to 0.0 (the "unavailable" sentinel).
pub fn coerce_float(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_amount(s).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// String half of the coercion policy, also used for user-entered gas
/// amounts ("21,000" and "21000" both parse).
pub fn parse_amount(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if let Ok(v) = trimmed.parse::<f64>() {
        return Some(v);
    }
    trimmed.replace(',', "").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coercion_round_trip() {
        assert_eq!(coerce_float(&json!("21,000")), 21000.0);
        assert_eq!(coerce_float(&json!("21000")), 21000.0);
        assert_eq!(coerce_float(&json!(21000.0)), 21000.0);
    }

    #[test]
    fn unparseable_values_coerce_to_zero() {
        assert_eq!(coerce_float(&json!("n/a")), 0.0);
        assert_eq!(coerce_float(&json!(null)), 0.0);
        assert_eq!(coerce_float(&json!({"nested": 1})), 0.0);
        assert_eq!(coerce_float(&json!(["12.5"])), 0.0);
    }

    #[test]
    fn fractional_gwei_survives() {
        assert_eq!(coerce_float(&json!("0.663046895")), 0.663046895);
        assert_eq!(coerce_float(&json!(12.75)), 12.75);
    }

    #[test]
    fn parse_amount_handles_separators_and_whitespace() {
        assert_eq!(parse_amount(" 1,234,567.5 "), Some(1234567.5));
        assert_eq!(parse_amount("21000"), Some(21000.0));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
    }
}
