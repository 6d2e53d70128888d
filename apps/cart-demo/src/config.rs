//! # Demo Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CARTWHEEL_*`)
//! 2. Defaults (this file)

use serde::{Deserialize, Serialize};

/// Demo configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoConfig {
    /// Customer the sample cart is created for.
    pub customer_id: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            customer_id: "customer-demo".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl DemoConfig {
    /// Builds the configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CARTWHEEL_CUSTOMER_ID`: Override customer id
    /// - `CARTWHEEL_CURRENCY_SYMBOL`: Override currency symbol
    /// - `CARTWHEEL_CURRENCY_DECIMALS`: Override decimal places (ignored if not a number)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = DemoConfig::default();

        if let Some(customer_id) = lookup("CARTWHEEL_CUSTOMER_ID") {
            config.customer_id = customer_id;
        }

        if let Some(symbol) = lookup("CARTWHEEL_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("CARTWHEEL_CURRENCY_DECIMALS") {
            if let Ok(decimals) = decimals.parse::<u8>() {
                config.currency_decimals = decimals;
            }
        }

        config
    }

    /// Formats a cent amount as a currency string.
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_currency_positive() {
        let config = DemoConfig::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = DemoConfig::default();
        assert_eq!(config.format_currency(-1234), "-$12.34");
        assert_eq!(config.format_currency(-5), "-$0.05");
    }

    #[test]
    fn test_format_currency_no_decimals() {
        let config = DemoConfig {
            currency_symbol: "¥".to_string(),
            currency_decimals: 0,
            ..DemoConfig::default()
        };
        assert_eq!(config.format_currency(1500), "¥1500");
    }

    #[test]
    fn test_overrides_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("CARTWHEEL_CUSTOMER_ID", "customer-42"),
            ("CARTWHEEL_CURRENCY_SYMBOL", "€"),
            ("CARTWHEEL_CURRENCY_DECIMALS", "not-a-number"),
        ]);

        let config = DemoConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.customer_id, "customer-42");
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.currency_decimals, 2);
    }
}
