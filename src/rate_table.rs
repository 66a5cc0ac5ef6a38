use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::exchange_rate::ExchangeRate;

/// Currency every rate in the table is quoted against.
pub const BASE_CURRENCY: &str = "BRL";

/// Fixed exchange-rate table. Every conversion is routed through
/// [`BASE_CURRENCY`], whose rate is exactly one.
///
/// The table is built once and never mutated; callers only get shared
/// borrows of it.
#[derive(Debug, Clone)]
pub struct RateTable {
    to_base: BTreeMap<String, Decimal>,
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RateTable {
    pub fn new() -> Self {
        let to_base = BTreeMap::from([
            (BASE_CURRENCY.to_string(), dec!(1.00)),
            ("USD".to_string(), dec!(5.60)),
            ("EUR".to_string(), dec!(6.10)),
        ]);

        Self { to_base }
    }

    pub fn base_currency(&self) -> &'static str {
        BASE_CURRENCY
    }

    /// Supported currency codes in ascending order.
    pub fn get_currencies(&self) -> Vec<&str> {
        self.to_base.keys().map(String::as_str).collect()
    }

    pub fn supports(&self, code: &str) -> bool {
        self.to_base.contains_key(code)
    }

    /// Rate of `code` expressed in the base currency.
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.to_base.get(code).copied()
    }

    /// Read-only view of every code -> rate pair.
    pub fn rates(&self) -> &BTreeMap<String, Decimal> {
        &self.to_base
    }

    pub fn entries(&self) -> impl Iterator<Item = ExchangeRate> + '_ {
        self.to_base
            .iter()
            .map(|(code, rate)| ExchangeRate::new(code.clone(), *rate))
    }

    /// Converts `amount` from one currency to another.
    ///
    /// Returns zero when either code is unsupported. Use [`try_convert`]
    /// to tell that apart from a genuine zero result.
    ///
    /// [`try_convert`]: RateTable::try_convert
    pub fn convert(&self, amount: Decimal, from: &str, to: &str) -> Decimal {
        self.try_convert(amount, from, to).unwrap_or(Decimal::ZERO)
    }

    /// Like [`convert`](RateTable::convert) but yields `None` for an
    /// unsupported code or a result outside the decimal range.
    pub fn try_convert(&self, amount: Decimal, from: &str, to: &str) -> Option<Decimal> {
        let (Some(from_rate), Some(to_rate)) = (self.rate(from), self.rate(to)) else {
            debug!("Unsupported conversion {} -> {}", from, to);
            return None;
        };

        if from == to {
            return Some(amount);
        }

        let base = amount.checked_mul(from_rate)?;
        base.checked_div(to_rate)
    }
}
