//! CSV 내보내기 형식 회귀 테스트.
use std::fs;
use std::path::PathBuf;

use buy_rent_toolbox::breakeven::{analyze, BreakevenInput};
use buy_rent_toolbox::currency::Currency;
use buy_rent_toolbox::export::write_csv;

fn temp_csv_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("buy_rent_export_{tag}_{}.csv", std::process::id()))
}

#[test]
fn csv_has_header_sweep_rows_and_summary() {
    // 기본 시나리오: 총 50000, 월 416.67, 구간 300~1200
    let result = analyze(&BreakevenInput::default());
    let path = temp_csv_path("default");
    write_csv(&path, &result, Currency::Eur).expect("csv write");
    let content = fs::read_to_string(&path).expect("csv read");
    fs::remove_file(&path).ok();

    let lines: Vec<&str> = content.lines().collect();
    // 헤더 1 + 표본 50 + 빈 줄 1 + 요약 4
    assert_eq!(lines.len(), 56);
    assert_eq!(lines[0], "Monthly Rent,Monthly Return,Verdict");
    assert_eq!(lines[1], "300.00,416.67,favors renting");
    assert_eq!(lines[50], "1200.00,416.67,favors buying");
    assert_eq!(lines[51], "");
    assert_eq!(lines[52], "Summary");
    assert_eq!(lines[53], "Currency,EUR");
    assert_eq!(lines[54], "Total Initial Cost,50000.00");
    assert_eq!(lines[55], "Expected Monthly Return,416.67");
}

#[test]
fn csv_labels_stay_english_for_krw() {
    // 판정 라벨과 열 이름은 통화/언어 설정과 무관하게 고정이다.
    let input = BreakevenInput {
        min_rent: 500.0,
        max_rent: 500.0,
        ..BreakevenInput::default()
    };
    let result = analyze(&input);
    let path = temp_csv_path("krw");
    write_csv(&path, &result, Currency::Krw).expect("csv write");
    let content = fs::read_to_string(&path).expect("csv read");
    fs::remove_file(&path).ok();

    assert!(content.starts_with("Monthly Rent,Monthly Return,Verdict"));
    assert!(content.contains("Currency,KRW"));
    // 500 > 416.67 이므로 모든 행이 매수 우세
    assert_eq!(content.matches("favors buying").count(), 50);
}
