//! 손익분기 계산 회귀 테스트.
use buy_rent_toolbox::breakeven::{
    analyze, classify, monthly_return, rent_samples, total_initial_cost, BreakevenInput,
    RentVerdict, RENT_SAMPLE_COUNT,
};

#[test]
fn total_cost_is_exact_sum() {
    let input = BreakevenInput {
        down_payment: 40_000.0,
        taxes: 5_000.0,
        other_costs: 5_000.0,
        ..BreakevenInput::default()
    };
    assert_eq!(total_initial_cost(&input), 50_000.0);

    let zero = BreakevenInput {
        down_payment: 0.0,
        taxes: 0.0,
        other_costs: 0.0,
        ..BreakevenInput::default()
    };
    assert_eq!(total_initial_cost(&zero), 0.0);
}

#[test]
fn monthly_return_is_simple_pro_rating() {
    // 50000 x 10% / 12 = 416.67
    let m = monthly_return(50_000.0, 10.0);
    assert!((m - 416.666_666_666_666_7).abs() < 1e-9);
    assert!((m - 50_000.0 * 10.0 / 1200.0).abs() < 1e-9);

    for pct in [1.0, 7.5, 15.0] {
        let m = monthly_return(120_000.0, pct);
        assert!((m - 120_000.0 * pct / 1200.0).abs() < 1e-9);
    }
}

#[test]
fn sweep_has_fixed_count_and_exact_endpoints() {
    let samples = rent_samples(300.0, 1200.0);
    assert_eq!(samples.len(), RENT_SAMPLE_COUNT);
    assert_eq!(samples.len(), 50);
    assert_eq!(samples[0], 300.0);
    assert_eq!(*samples.last().unwrap(), 1200.0);

    // 등간격: step = 900 / 49 ≈ 18.37
    let step = (1200.0 - 300.0) / 49.0;
    assert!((samples[1] - samples[0] - step).abs() < 1e-9);
    for pair in samples.windows(2) {
        assert!(pair[1] >= pair[0]);
        assert!((pair[1] - pair[0] - step).abs() < 1e-6);
    }
}

#[test]
fn sweep_collapses_when_range_is_a_point() {
    let samples = rent_samples(750.0, 750.0);
    assert_eq!(samples.len(), RENT_SAMPLE_COUNT);
    assert!(samples.iter().all(|&r| r == 750.0));
}

#[test]
fn sweep_descends_when_range_is_inverted() {
    // 검증하지 않는 입력이지만 선형 보간 동작 자체는 고정해 둔다.
    let samples = rent_samples(1200.0, 300.0);
    assert_eq!(samples[0], 1200.0);
    assert_eq!(*samples.last().unwrap(), 300.0);
    for pair in samples.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
}

#[test]
fn classification_uses_strict_comparisons() {
    assert_eq!(classify(417.0, 416.67), RentVerdict::FavorsBuying);
    assert_eq!(classify(416.0, 416.67), RentVerdict::FavorsRenting);
    assert_eq!(classify(500.0, 500.0), RentVerdict::Breakeven);
}

#[test]
fn analyze_default_scenario() {
    // 40000 + 5000 + 5000 @ 10% => 총 50000, 월 416.67
    let result = analyze(&BreakevenInput::default());
    assert_eq!(result.total_initial_cost, 50_000.0);
    assert!((result.monthly_return - 416.666_666_666_666_7).abs() < 1e-9);
    assert_eq!(result.samples.len(), 50);
    for sample in &result.samples {
        assert_eq!(sample.verdict, classify(sample.rent, result.monthly_return));
    }
    // 구간이 손익분기 양쪽에 걸치므로 두 판정이 모두 나온다.
    assert!(result
        .samples
        .iter()
        .any(|s| s.verdict == RentVerdict::FavorsRenting));
    assert!(result
        .samples
        .iter()
        .any(|s| s.verdict == RentVerdict::FavorsBuying));
}

#[test]
fn zero_costs_make_every_positive_rent_favor_buying() {
    let input = BreakevenInput {
        down_payment: 0.0,
        taxes: 0.0,
        other_costs: 0.0,
        annual_return_pct: 5.0,
        min_rent: 300.0,
        max_rent: 1200.0,
    };
    let result = analyze(&input);
    assert_eq!(result.total_initial_cost, 0.0);
    assert_eq!(result.monthly_return, 0.0);
    assert!(result
        .samples
        .iter()
        .all(|s| s.verdict == RentVerdict::FavorsBuying));
}
