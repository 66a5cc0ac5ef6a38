pub mod exchange_rate;
pub mod rate_sheet;
pub mod rate_table;

pub use exchange_rate::ExchangeRate;
pub use rate_sheet::RateSheet;
pub use rate_table::{BASE_CURRENCY, RateTable};
