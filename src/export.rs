use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::breakeven::{BreakevenResult, RentVerdict};
use crate::currency::Currency;

/// 분석 결과를 CSV 파일로 저장한다. 수치는 소수 둘째 자리로 기록한다.
pub fn write_csv(path: &Path, result: &BreakevenResult, currency: Currency) -> io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Monthly Rent,Monthly Return,Verdict")?;
    for sample in &result.samples {
        writeln!(
            file,
            "{:.2},{:.2},{}",
            sample.rent,
            result.monthly_return,
            verdict_label(sample.verdict)
        )?;
    }

    writeln!(file)?;
    writeln!(file, "Summary")?;
    writeln!(file, "Currency,{}", currency.code())?;
    writeln!(file, "Total Initial Cost,{:.2}", result.total_initial_cost)?;
    writeln!(file, "Expected Monthly Return,{:.2}", result.monthly_return)?;
    Ok(())
}

// CSV는 언어 설정과 무관하게 고정 영문 라벨을 쓴다.
fn verdict_label(verdict: RentVerdict) -> &'static str {
    match verdict {
        RentVerdict::FavorsBuying => "favors buying",
        RentVerdict::FavorsRenting => "favors renting",
        RentVerdict::Breakeven => "breakeven",
    }
}
