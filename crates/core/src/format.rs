//! en-US style number and date formatting for dashboard cells and cards.

use chrono::NaiveDate;

/// Fraction digits and currency style for a number cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    /// ISO currency code; `None` formats a plain number
    pub currency: Option<String>,
    pub min_fraction: usize,
    pub max_fraction: usize,
    /// Thousands separators
    pub grouping: bool,
    /// Scale large amounts down, `$47.34K` instead of `$47,340.46`
    pub compact: bool,
}

impl NumberFormat {
    /// Currency with cents, e.g. `$29,444.48`.
    pub fn currency(code: &str) -> Self {
        Self {
            currency: Some(code.to_uppercase()),
            min_fraction: 2,
            max_fraction: 2,
            grouping: true,
            compact: false,
        }
    }

    /// Currency with at most two decimals and no padding, e.g. `$4,692` or
    /// `$4,904.1`.
    pub fn fiat_total(code: &str) -> Self {
        Self {
            min_fraction: 0,
            ..Self::currency(code)
        }
    }

    /// Whole currency units, e.g. `$125,863` (goal amounts).
    pub fn whole_currency(code: &str) -> Self {
        Self {
            min_fraction: 0,
            max_fraction: 0,
            ..Self::currency(code)
        }
    }

    /// Coin quantities: at least 2, at most 8 fraction digits.
    pub fn crypto_amount() -> Self {
        Self {
            currency: None,
            min_fraction: 2,
            max_fraction: 8,
            grouping: true,
            compact: false,
        }
    }

    pub fn plain(max_fraction: usize) -> Self {
        Self {
            currency: None,
            min_fraction: 0,
            max_fraction,
            grouping: true,
            compact: false,
        }
    }

    pub fn compacted(self, compact: bool) -> Self {
        Self { compact, ..self }
    }

    pub fn format(&self, amount: f64) -> String {
        if amount.is_nan() {
            return "NaN".to_string();
        }
        let prefix = self.currency.as_deref().map(currency_symbol).unwrap_or_default();
        if amount.is_infinite() {
            let sign = if amount < 0.0 { "-" } else { "" };
            return format!("{sign}{prefix}∞");
        }

        let digits = if self.compact {
            format_compact(amount.abs())
        } else {
            self.digits(amount.abs())
        };
        // Rounded-to-zero values lose their sign ("-0.00" never shows)
        let is_zero = digits.chars().all(|c| !c.is_ascii_digit() || c == '0');
        let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
        format!("{sign}{prefix}{digits}")
    }

    fn digits(&self, abs: f64) -> String {
        let fixed = format!("{:.*}", self.max_fraction, abs);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i.to_string(), f.to_string()),
            None => (fixed, String::new()),
        };

        let mut frac = frac_part;
        while frac.len() > self.min_fraction && frac.ends_with('0') {
            frac.pop();
        }

        let int_part = if self.grouping {
            group_thousands(&int_part)
        } else {
            int_part
        };

        if frac.is_empty() {
            int_part
        } else {
            format!("{int_part}.{frac}")
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn currency_symbol(code: &str) -> String {
    match code {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        "INR" => "₹".to_string(),
        other => format!("{other}\u{a0}"),
    }
}

/// Up/down coloring of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    /// Zero counts as positive.
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }
}

/// `+$1,234.50` / `-$12.86`.
pub fn format_signed_currency(amount: f64, format: &NumberFormat) -> String {
    let plus = if amount >= 0.0 { "+" } else { "" };
    format!("{plus}{}", format.format(amount))
}

/// `+53.96%` / `-13.46%`, always two decimals.
pub fn format_signed_percent(percent: f64) -> String {
    let plus = if percent >= 0.0 { "+" } else { "" };
    format!("{plus}{percent:.2}%")
}

/// Compact notation with up to two decimals: `28.46M`, `875K`, `1.2B`.
pub fn format_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    let plain = NumberFormat {
        grouping: false,
        ..NumberFormat::plain(2)
    };

    for (i, (scale, suffix)) in UNITS.iter().enumerate() {
        if abs >= *scale {
            let scaled = round2(abs / scale);
            // 999.999K rounds up into the next unit
            if scaled >= 1000.0 && i > 0 {
                let (bigger, bigger_suffix) = UNITS[i - 1];
                return format!("{sign}{}{bigger_suffix}", plain.format(round2(abs / bigger)));
            }
            return format!("{sign}{}{suffix}", plain.format(scaled));
        }
    }

    let rounded = round2(abs);
    if rounded >= 1000.0 {
        return format!("{sign}1K");
    }
    format!("{sign}{}", plain.format(rounded))
}

/// Market cap already expressed in billions: `788.5B`.
pub fn format_market_cap(billions: f64) -> String {
    format!("{billions:.1}B")
}

/// `Apr 15`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// `Jan 2040`.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn round2_half_up() {
        assert_eq!(round2(28.456789), 28.46);
    }
}
