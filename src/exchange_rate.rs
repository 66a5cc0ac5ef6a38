use rust_decimal::Decimal;

/// A currency code and its rate against the base currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRate {
    pub code: String,
    pub rate: Decimal,
}

impl ExchangeRate {
    pub fn new(code: impl Into<String>, rate: Decimal) -> Self {
        Self {
            code: code.into(),
            rate,
        }
    }
}
