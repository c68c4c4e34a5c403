//! 언어 결정 순서와 번역기 폴백 회귀 테스트.
use buy_rent_toolbox::i18n::{keys, resolve_language, Translator};

#[test]
fn explicit_flag_wins_over_config() {
    assert_eq!(resolve_language("ko", Some("en-us")), "ko");
    assert_eq!(resolve_language("en-us", Some("ko-kr")), "en-us");
}

#[test]
fn auto_falls_back_to_config() {
    assert_eq!(resolve_language("auto", Some("ko-kr")), "ko-kr");
    assert_eq!(resolve_language("", Some("en-us")), "en-us");
}

#[test]
fn unknown_code_falls_back_to_config() {
    assert_eq!(resolve_language("fr", Some("ko-kr")), "ko-kr");
}

#[test]
fn regional_variants_normalize() {
    assert_eq!(resolve_language("en-UK", Some("ko-kr")), "en-us");
    assert_eq!(resolve_language("ko_KR", Some("en-us")), "ko");
}

#[test]
fn translator_uses_builtin_tables() {
    let en = Translator::new("en-us");
    assert_eq!(en.t(keys::VERDICT_BUY), "favors buying");

    let ko = Translator::new("ko-kr");
    assert_eq!(ko.t(keys::VERDICT_BUY), "매수 우세");

    // 알 수 없는 코드는 영어로 폴백한다.
    let fallback = Translator::new("fr");
    assert_eq!(fallback.t(keys::VERDICT_BUY), "favors buying");
}

#[test]
fn builtin_pack_supplies_gui_strings() {
    let ko = Translator::new_with_pack("ko-kr", None);
    assert_eq!(ko.lookup("gui.nav.app_title").as_deref(), Some("임차-매수 결정 도구"));

    let en = Translator::new_with_pack("en-us", None);
    assert_eq!(
        en.lookup("gui.chart.rent_line").as_deref(),
        Some("Cost of Renting")
    );
}
