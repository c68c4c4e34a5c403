//! 통화 표시 형식 회귀 테스트.
use buy_rent_toolbox::currency::{group_thousands, Currency};

#[test]
fn eur_groups_thousands_with_two_decimals() {
    assert_eq!(Currency::Eur.format(50_000.0), "€50,000.00");
    assert_eq!(Currency::Eur.format(416.666_666_7), "€416.67");
}

#[test]
fn krw_uses_no_decimals() {
    assert_eq!(Currency::Krw.format(1_234_567.0), "₩1,234,567");
    assert_eq!(Currency::Krw.format(416.7), "₩417");
}

#[test]
fn grouping_handles_sign_and_rounding() {
    assert_eq!(group_thousands(-1_234.5, 2), "-1,234.50");
    // 반올림으로 자릿수가 늘어나도 구분자가 맞아야 한다.
    assert_eq!(group_thousands(999.999, 2), "1,000.00");
    assert_eq!(group_thousands(0.0, 2), "0.00");
    assert_eq!(group_thousands(123.0, 0), "123");
}

#[test]
fn currency_codes_and_symbols() {
    assert_eq!(Currency::Eur.code(), "EUR");
    assert_eq!(Currency::Usd.symbol(), "$");
    assert_eq!(Currency::Gbp.symbol(), "£");
    assert_eq!(Currency::default(), Currency::Eur);
}
