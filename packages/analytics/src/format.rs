//! Display formatting shared by the view builders.

/// Formats an integer with comma thousands separators: `1234567` →
/// `"1,234,567"`.
#[must_use]
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a percentage with a fixed number of decimals: `"64.77%"`.
#[must_use]
pub fn percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// Formats a percentage change with an explicit sign: `"+3.9%"`.
#[must_use]
pub fn signed_percent(value: f64, decimals: usize) -> String {
    format!("{value:+.decimals$}%")
}

/// Converts a count to millions.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_millions(n: u64) -> f64 {
    n as f64 / 1_000_000.0
}

/// Formats a count in millions: `27_820_000` → `"27.8M"`.
#[must_use]
pub fn millions(n: u64, decimals: usize) -> String {
    format!("{:.decimals$}M", to_millions(n))
}

/// Rounds to `decimals` decimal places.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Unweighted arithmetic mean, or `None` for no values.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
