//! Property tests for the fixed rate table.

use conversor::RateTable;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..=6)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn arb_supported_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("BRL"), Just("EUR"), Just("USD")]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_same_currency_is_identity(amount in arb_amount(), code in arb_supported_code()) {
        let table = RateTable::new();
        prop_assert_eq!(table.convert(amount, code, code), amount);
    }

    #[test]
    fn prop_conversion_routes_through_base(
        amount in arb_amount(),
        from in arb_supported_code(),
        to in arb_supported_code(),
    ) {
        prop_assume!(from != to);
        let table = RateTable::new();
        let expected = amount * table.rate(from).unwrap() / table.rate(to).unwrap();
        prop_assert_eq!(table.convert(amount, from, to), expected);
    }

    #[test]
    fn prop_unsupported_code_yields_zero(
        amount in arb_amount(),
        code in "[A-Z]{3}",
        target in arb_supported_code(),
    ) {
        let table = RateTable::new();
        prop_assume!(!table.supports(&code));
        prop_assert_eq!(table.convert(amount, &code, target), Decimal::ZERO);
        prop_assert_eq!(table.convert(amount, target, &code), Decimal::ZERO);
    }
}

#[test]
fn currencies_match_fixed_table() {
    let table = RateTable::new();
    assert_eq!(table.get_currencies(), vec!["BRL", "EUR", "USD"]);
    assert_eq!(table.rate(table.base_currency()), Some(Decimal::ONE));
}
