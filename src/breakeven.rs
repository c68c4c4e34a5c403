use serde::{Deserialize, Serialize};

/// 임차-매수 비교 분석 입력.
///
/// 금액 항목은 모두 설정된 표시 통화 기준이며, 계산 자체는 통화에 무관하다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakevenInput {
    /// 계약금(다운페이먼트) [통화]
    pub down_payment: f64,
    /// 취득 관련 세금 [통화]
    pub taxes: f64,
    /// 기타 거래 비용 [통화]
    pub other_costs: f64,
    /// 기대 연 수익률 [%], 1~15 (입력 위젯에서 제한)
    pub annual_return_pct: f64,
    /// 분석 구간 최소 월세 [통화]
    pub min_rent: f64,
    /// 분석 구간 최대 월세 [통화]
    pub max_rent: f64,
}

impl Default for BreakevenInput {
    fn default() -> Self {
        Self {
            down_payment: 40_000.0,
            taxes: 5_000.0,
            other_costs: 5_000.0,
            annual_return_pct: 10.0,
            min_rent: 300.0,
            max_rent: 1_200.0,
        }
    }
}

/// 월세 표본 1점에 대한 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentVerdict {
    /// 월세 > 월 기대수익. 매수가 유리한 구간.
    FavorsBuying,
    /// 월세 < 월 기대수익. 임차가 유리한 구간.
    FavorsRenting,
    /// 월세 = 월 기대수익.
    Breakeven,
}

/// 월세 표본 1점.
#[derive(Debug, Clone, Copy)]
pub struct RentSample {
    /// 월세 [통화]
    pub rent: f64,
    pub verdict: RentVerdict,
}

/// 분석 결과.
#[derive(Debug, Clone)]
pub struct BreakevenResult {
    /// 총 초기 비용 [통화]
    pub total_initial_cost: f64,
    /// 초기 비용을 투자했을 때의 월 기대수익 [통화]
    pub monthly_return: f64,
    /// [min_rent, max_rent] 구간의 월세 표본
    pub samples: Vec<RentSample>,
}

/// 월세 구간 표본 개수.
pub const RENT_SAMPLE_COUNT: usize = 50;

/// 세 초기 비용 항목의 합.
pub fn total_initial_cost(input: &BreakevenInput) -> f64 {
    input.down_payment + input.taxes + input.other_costs
}

/// 연 수익률을 단순 월할(12분할, 복리 미적용)한 월 기대수익.
pub fn monthly_return(total_initial_cost: f64, annual_return_pct: f64) -> f64 {
    total_initial_cost * (annual_return_pct / 100.0 / 12.0)
}

/// 양끝을 포함하는 등간격 월세 표본을 생성한다.
///
/// 표본 수는 항상 [`RENT_SAMPLE_COUNT`]. 마지막 점은 누적 오차 없이
/// `max_rent`에 고정한다. `max_rent < min_rent`이면 내림차순 수열이 된다.
pub fn rent_samples(min_rent: f64, max_rent: f64) -> Vec<f64> {
    let last = RENT_SAMPLE_COUNT - 1;
    let step = (max_rent - min_rent) / last as f64;
    (0..RENT_SAMPLE_COUNT)
        .map(|i| {
            if i == last {
                max_rent
            } else {
                min_rent + step * i as f64
            }
        })
        .collect()
}

/// 월세 1점을 월 기대수익과 비교해 판정한다. 비교는 엄격 부등호를 쓴다.
pub fn classify(rent: f64, monthly_return: f64) -> RentVerdict {
    if rent > monthly_return {
        RentVerdict::FavorsBuying
    } else if rent < monthly_return {
        RentVerdict::FavorsRenting
    } else {
        RentVerdict::Breakeven
    }
}

/// 전체 분석을 수행한다. 입력만의 순수 함수이며 매 호출 시 전부 재계산한다.
pub fn analyze(input: &BreakevenInput) -> BreakevenResult {
    let total = total_initial_cost(input);
    let monthly = monthly_return(total, input.annual_return_pct);
    let samples = rent_samples(input.min_rent, input.max_rent)
        .into_iter()
        .map(|rent| RentSample {
            rent,
            verdict: classify(rent, monthly),
        })
        .collect();
    BreakevenResult {
        total_initial_cost: total,
        monthly_return: monthly,
        samples,
    }
}
