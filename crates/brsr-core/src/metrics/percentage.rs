/// Sentinel for a ratio whose denominator is zero or whose operands are not numbers.
pub const NOT_APPLICABLE: &str = "N/A";

pub const DEFAULT_PERCENTAGE_DECIMALS: usize = 2;
pub const INTENSITY_DECIMALS: usize = 4;

/// `numerator / denominator` as a percentage string with two decimals.
pub fn percentage(numerator: f64, denominator: f64) -> String {
    percentage_with_precision(numerator, denominator, DEFAULT_PERCENTAGE_DECIMALS)
}

pub fn percentage_with_precision(numerator: f64, denominator: f64, decimals: usize) -> String {
    if !numerator.is_finite() || !denominator.is_finite() || denominator == 0.0 {
        return NOT_APPLICABLE.to_string();
    }

    let value = round_to(numerator / denominator * 100.0, decimals);
    format!("{value:.decimals$}%")
}

/// Fixed-precision ratio with a plain-text unit suffix; `N/A` for a non-positive base.
pub fn intensity(numerator: f64, base: f64, unit: &str) -> String {
    if !numerator.is_finite() || !base.is_finite() || base <= 0.0 {
        return NOT_APPLICABLE.to_string();
    }

    let value = round_to(numerator / base, INTENSITY_DECIMALS);
    format!("{value:.prec$} {unit}", prec = INTENSITY_DECIMALS)
}

/// Round half away from zero. `-0.0` collapses to `0.0`.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
