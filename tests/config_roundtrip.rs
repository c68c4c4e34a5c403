//! 설정 TOML 직렬화 왕복 회귀 테스트.
use buy_rent_toolbox::config::Config;
use buy_rent_toolbox::currency::Currency;

#[test]
fn default_config_roundtrips_through_toml() {
    let cfg = Config::default();
    let text = toml::to_string_pretty(&cfg).expect("serialize");
    let back: Config = toml::from_str(&text).expect("parse");

    assert_eq!(back.language, "auto");
    assert_eq!(back.language_pack_dir, None);
    assert_eq!(back.currency, Currency::Eur);
    assert!((back.window_alpha - 1.0).abs() < f32::EPSILON);
    assert_eq!(back.defaults, cfg.defaults);
}

#[test]
fn customized_config_survives_roundtrip() {
    let mut cfg = Config::default();
    cfg.language = "ko-kr".to_string();
    cfg.language_pack_dir = Some("packs".to_string());
    cfg.currency = Currency::Krw;
    cfg.window_alpha = 0.85;
    cfg.defaults.down_payment = 60_000.0;
    cfg.defaults.max_rent = 2_000.0;

    let text = toml::to_string_pretty(&cfg).expect("serialize");
    let back: Config = toml::from_str(&text).expect("parse");

    assert_eq!(back.language, "ko-kr");
    assert_eq!(back.language_pack_dir.as_deref(), Some("packs"));
    assert_eq!(back.currency, Currency::Krw);
    assert!((back.window_alpha - 0.85).abs() < 1e-6);
    assert_eq!(back.defaults.down_payment, 60_000.0);
    assert_eq!(back.defaults.max_rent, 2_000.0);
}

#[test]
fn missing_pack_dir_key_parses_as_none() {
    // 이전 버전 config.toml에는 language_pack_dir 키가 없을 수 있다.
    let text = r#"
language = "en-us"
currency = "Usd"
window_alpha = 1.0

[defaults]
down_payment = 40000.0
taxes = 5000.0
other_costs = 5000.0
annual_return_pct = 10.0
min_rent = 300.0
max_rent = 1200.0
"#;
    let cfg: Config = toml::from_str(text).expect("parse");
    assert_eq!(cfg.language_pack_dir, None);
    assert_eq!(cfg.currency, Currency::Usd);
}
