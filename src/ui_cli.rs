use std::io::{self, Write};
use std::path::Path;

use crate::app::AppError;
use crate::breakeven::{self, BreakevenInput, RentVerdict};
use crate::config::Config;
use crate::currency::Currency;
use crate::export;
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Analysis,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ANALYSIS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Analysis),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 임차-매수 비교 분석 메뉴를 처리한다.
pub fn handle_analysis(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ANALYSIS_HEADING));
    println!("{}", tr.t(keys::HELP_ANALYSIS));
    let cur = cfg.currency;
    let d = &cfg.defaults;

    let down_payment = read_amount(tr, keys::PROMPT_DOWN_PAYMENT, cur, d.down_payment)?;
    let taxes = read_amount(tr, keys::PROMPT_TAXES, cur, d.taxes)?;
    let other_costs = read_amount(tr, keys::PROMPT_OTHER_COSTS, cur, d.other_costs)?;
    let annual_return_pct = read_return_pct(tr, d.annual_return_pct)?;
    let min_rent = read_amount(tr, keys::PROMPT_MIN_RENT, cur, d.min_rent)?;
    let max_rent = read_amount(tr, keys::PROMPT_MAX_RENT, cur, d.max_rent)?;

    let input = BreakevenInput {
        down_payment,
        taxes,
        other_costs,
        annual_return_pct,
        min_rent,
        max_rent,
    };
    let result = breakeven::analyze(&input);

    println!();
    println!("{} {}", tr.t(keys::RESULT_TOTAL_COST), cur.format(result.total_initial_cost));
    println!("{} {}", tr.t(keys::RESULT_MONTHLY_RETURN), cur.format(result.monthly_return));
    println!("{} {}", tr.t(keys::RESULT_ABOVE_FAVORS_BUYING), cur.format(result.monthly_return));
    println!("{} {}", tr.t(keys::RESULT_BELOW_FAVORS_RENTING), cur.format(result.monthly_return));

    println!();
    println!("{}", tr.t(keys::TABLE_HEADING));
    println!("{:>14}  {}", tr.t(keys::TABLE_COL_RENT), tr.t(keys::TABLE_COL_VERDICT));
    for sample in &result.samples {
        println!("{:>14}  {}", cur.format(sample.rent), verdict_text(tr, sample.verdict));
    }

    println!();
    println!("{}", tr.t(keys::NOTE_HEADING));
    println!("{}", tr.t(keys::NOTE_BODY));

    let path = read_line(tr.t(keys::EXPORT_PROMPT_PATH))?;
    let path = path.trim();
    if !path.is_empty() {
        match export::write_csv(Path::new(path), &result, cur) {
            Ok(()) => println!("{} {path}", tr.t(keys::EXPORT_DONE)),
            Err(e) => println!("{}: {e}", tr.t(keys::EXPORT_ERROR)),
        }
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::HELP_SETTINGS));

    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.language = "auto".to_string(),
        "2" => cfg.language = "en-us".to_string(),
        "3" => cfg.language = "ko-kr".to_string(),
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }

    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_CURRENCY), cfg.currency.code());
    println!("{}", tr.t(keys::SETTINGS_CURRENCY_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.currency = Currency::Eur,
        "2" => cfg.currency = Currency::Usd,
        "3" => cfg.currency = Currency::Gbp,
        "4" => cfg.currency = Currency::Krw,
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }

    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn verdict_text(tr: &Translator, verdict: RentVerdict) -> &'static str {
    match verdict {
        RentVerdict::FavorsBuying => tr.t(keys::VERDICT_BUY),
        RentVerdict::FavorsRenting => tr.t(keys::VERDICT_RENT),
        RentVerdict::Breakeven => tr.t(keys::VERDICT_TIE),
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 금액을 읽는다. 빈 입력은 기본값, 음수와 숫자 아닌 입력은 재시도.
fn read_amount(
    tr: &Translator,
    label_key: &str,
    cur: Currency,
    default: f64,
) -> Result<f64, AppError> {
    let prompt = format!(
        "{} [{}] ({} {:.0}): ",
        tr.t(label_key),
        cur.code(),
        tr.t(keys::PROMPT_DEFAULT_TAG),
        default
    );
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) if v >= 0.0 => return Ok(v),
            Ok(_) => println!("{}", tr.t(keys::ERROR_NEGATIVE)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 연 수익률을 읽는다. 1~15 범위를 벗어나면 재시도.
fn read_return_pct(tr: &Translator, default: f64) -> Result<f64, AppError> {
    let prompt = format!(
        "{} [%] (1~15, {} {:.0}): ",
        tr.t(keys::PROMPT_ANNUAL_RETURN),
        tr.t(keys::PROMPT_DEFAULT_TAG),
        default
    );
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) if (1.0..=15.0).contains(&v) => return Ok(v),
            Ok(_) => println!("{}", tr.t(keys::ERROR_RETURN_RANGE)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
