use serde::{Deserialize, Serialize};

/// 표시 통화.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Eur,
    Usd,
    Gbp,
    Krw,
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Eur
    }
}

impl Currency {
    /// 통화 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
            Currency::Gbp => "£",
            Currency::Krw => "₩",
        }
    }

    /// ISO 4217 코드.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Krw => "KRW",
        }
    }

    /// 표시 소수 자릿수. 원화는 보조 단위를 쓰지 않는다.
    pub fn decimals(&self) -> usize {
        match self {
            Currency::Krw => 0,
            _ => 2,
        }
    }

    /// 기호 + 천 단위 구분이 들어간 표시 문자열을 만든다.
    pub fn format(&self, amount: f64) -> String {
        format!("{}{}", self.symbol(), group_thousands(amount, self.decimals()))
    }
}

/// 선택 가능한 통화 목록.
pub fn currency_options() -> &'static [Currency] {
    &[Currency::Eur, Currency::Usd, Currency::Gbp, Currency::Krw]
}

/// 소수 `decimals` 자리로 반올림하고 정수부에 천 단위 쉼표를 넣는다.
pub fn group_thousands(amount: f64, decimals: usize) -> String {
    let fixed = format!("{amount:.decimals$}");
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
