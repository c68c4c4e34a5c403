use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ANALYSIS: &str = "main_menu.analysis";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const ANALYSIS_HEADING: &str = "analysis.heading";
    pub const PROMPT_DEFAULT_TAG: &str = "prompt.default_tag";
    pub const PROMPT_DOWN_PAYMENT: &str = "prompt.down_payment";
    pub const PROMPT_TAXES: &str = "prompt.taxes";
    pub const PROMPT_OTHER_COSTS: &str = "prompt.other_costs";
    pub const PROMPT_ANNUAL_RETURN: &str = "prompt.annual_return";
    pub const PROMPT_MIN_RENT: &str = "prompt.min_rent";
    pub const PROMPT_MAX_RENT: &str = "prompt.max_rent";

    pub const RESULT_TOTAL_COST: &str = "result.total_cost";
    pub const RESULT_MONTHLY_RETURN: &str = "result.monthly_return";
    pub const RESULT_ABOVE_FAVORS_BUYING: &str = "result.above_favors_buying";
    pub const RESULT_BELOW_FAVORS_RENTING: &str = "result.below_favors_renting";

    pub const TABLE_HEADING: &str = "table.heading";
    pub const TABLE_COL_RENT: &str = "table.col_rent";
    pub const TABLE_COL_VERDICT: &str = "table.col_verdict";
    pub const VERDICT_BUY: &str = "verdict.buy";
    pub const VERDICT_RENT: &str = "verdict.rent";
    pub const VERDICT_TIE: &str = "verdict.tie";

    pub const EXPORT_PROMPT_PATH: &str = "export.prompt_path";
    pub const EXPORT_DONE: &str = "export.done";
    pub const EXPORT_ERROR: &str = "export.error";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_CURRENT_CURRENCY: &str = "settings.current_currency";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_CURRENCY_OPTIONS: &str = "settings.currency_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_RETURN_RANGE: &str = "error.return_range";
    pub const ERROR_NEGATIVE: &str = "error.negative";

    pub const NOTE_HEADING: &str = "note.heading";
    pub const NOTE_BODY: &str = "note.body";

    pub const HELP_ANALYSIS: &str = "help.analysis";
    pub const HELP_SETTINGS: &str = "help.settings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Buy vs Rent Decision Toolbox ===",
        MAIN_MENU_ANALYSIS => "1) 임차-매수 비교 분석",
        MAIN_MENU_SETTINGS => "2) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ANALYSIS_HEADING => "\n-- 임차-매수 비교 분석 --",
        PROMPT_DEFAULT_TAG => "기본값",
        PROMPT_DOWN_PAYMENT => "계약금(다운페이먼트)",
        PROMPT_TAXES => "취득 관련 세금",
        PROMPT_OTHER_COSTS => "기타 거래 비용",
        PROMPT_ANNUAL_RETURN => "기대 연 수익률",
        PROMPT_MIN_RENT => "분석 최소 월세",
        PROMPT_MAX_RENT => "분석 최대 월세",
        RESULT_TOTAL_COST => "총 초기 비용:",
        RESULT_MONTHLY_RETURN => "월 기대수익:",
        RESULT_ABOVE_FAVORS_BUYING => "월세가 이 금액보다 높으면 매수가 유리합니다:",
        RESULT_BELOW_FAVORS_RENTING => "월세가 이 금액보다 낮으면 임차가 유리합니다:",
        TABLE_HEADING => "월세 구간 판정표",
        TABLE_COL_RENT => "월세",
        TABLE_COL_VERDICT => "판정",
        VERDICT_BUY => "매수 우세",
        VERDICT_RENT => "임차 우세",
        VERDICT_TIE => "손익분기",
        EXPORT_PROMPT_PATH => "CSV 저장 경로(엔터 시 건너뜀): ",
        EXPORT_DONE => "CSV로 저장했습니다:",
        EXPORT_ERROR => "CSV 저장 오류",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_CURRENT_CURRENCY => "현재 통화:",
        SETTINGS_LANGUAGE_OPTIONS => "1) auto  2) en-us  3) ko-kr",
        SETTINGS_CURRENCY_OPTIONS => "1) EUR  2) USD  3) GBP  4) KRW",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_RETURN_RANGE => "1~15 범위의 값을 입력하세요.",
        ERROR_NEGATIVE => "0 이상의 값을 입력하세요.",
        NOTE_HEADING => "주의: 단순화된 모형입니다.",
        NOTE_BODY => "반영하지 않는 항목: 자산 가치 상승, 유지보수비, 보유세, 관리비, 보험료, 대출 이자.",
        HELP_ANALYSIS => "도움말: 초기 비용 3개와 기대 수익률, 월세 구간을 입력하면 손익분기 월세를 계산합니다.",
        HELP_SETTINGS => "도움말: 언어와 표시 통화를 바꾸면 config.toml에 저장됩니다.",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Buy vs Rent Decision Toolbox ===",
        MAIN_MENU_ANALYSIS => "1) Buy vs rent analysis",
        MAIN_MENU_SETTINGS => "2) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ANALYSIS_HEADING => "\n-- Buy vs Rent Analysis --",
        PROMPT_DEFAULT_TAG => "default",
        PROMPT_DOWN_PAYMENT => "Down payment",
        PROMPT_TAXES => "Transaction taxes",
        PROMPT_OTHER_COSTS => "Other transaction costs",
        PROMPT_ANNUAL_RETURN => "Expected annual return",
        PROMPT_MIN_RENT => "Minimum monthly rent",
        PROMPT_MAX_RENT => "Maximum monthly rent",
        RESULT_TOTAL_COST => "Total initial cost:",
        RESULT_MONTHLY_RETURN => "Expected monthly return:",
        RESULT_ABOVE_FAVORS_BUYING => "If your monthly rent is above this, buying tends to win:",
        RESULT_BELOW_FAVORS_RENTING => "If your monthly rent is below this, renting tends to win:",
        TABLE_HEADING => "Rent sweep verdicts",
        TABLE_COL_RENT => "Rent",
        TABLE_COL_VERDICT => "Verdict",
        VERDICT_BUY => "favors buying",
        VERDICT_RENT => "favors renting",
        VERDICT_TIE => "breakeven",
        EXPORT_PROMPT_PATH => "CSV output path (enter to skip): ",
        EXPORT_DONE => "Exported to:",
        EXPORT_ERROR => "CSV export error",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_CURRENT_CURRENCY => "Current currency:",
        SETTINGS_LANGUAGE_OPTIONS => "1) auto  2) en-us  3) ko-kr",
        SETTINGS_CURRENCY_OPTIONS => "1) EUR  2) USD  3) GBP  4) KRW",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_RETURN_RANGE => "Please enter a value between 1 and 15.",
        ERROR_NEGATIVE => "Please enter a value of 0 or more.",
        NOTE_HEADING => "Note: this is a simplified model.",
        NOTE_BODY => "Not included: property appreciation, maintenance, recurring property tax, condo fees, insurance, mortgage interest.",
        HELP_ANALYSIS => "Help: enter the three initial costs, the expected return and a rent range to get the breakeven rent.",
        HELP_SETTINGS => "Help: language and display currency changes are saved to config.toml.",
        _ => "[missing translation]",
    }
}
