use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies a quote can be priced in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Mexican Peso (2 decimal places)
    #[default]
    MXN,
    /// US Dollar (2 decimal places)
    USD,
}

impl Currency {
    /// Returns the decimal scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::MXN | Currency::USD => 2,
        }
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    /// (banker's rounding, as `Decimal::round_dp` does). The result always
    /// carries exactly `scale()` fractional digits, so `250` becomes `250.00`.
    pub fn round(&self, amount: Decimal) -> Decimal {
        let mut rounded = amount.round_dp(self.scale());
        rounded.rescale(self.scale());
        rounded
    }

    /// Display symbol used in rendered documents
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::MXN | Currency::USD => "$",
        }
    }

    /// Formats an amount for display, e.g. `$1,234.50 MXN`
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rounded = self.round(amount);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let plain = format!("{:.width$}", rounded.abs(), width = self.scale() as usize);

        let (whole, fraction) = match plain.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (plain.as_str(), None),
        };

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if negative { "-" } else { "" };
        match fraction {
            Some(fraction) => format!("{}{}{}.{} {}", sign, self.symbol(), grouped, fraction, self),
            None => format!("{}{}{} {}", sign, self.symbol(), grouped, self),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::MXN => write!(f, "MXN"),
            Currency::USD => write!(f, "USD"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MXN" => Ok(Currency::MXN),
            "USD" => Ok(Currency::USD),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}
