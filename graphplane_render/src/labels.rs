// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Formats a tick value for display.
///
/// Values with `|v| >= 1e6` or `0 < |v| < 0.01` use exponential notation with
/// one fractional digit and a signed exponent (`1.5e+6`, `5.0e-3`). Anything
/// else is rounded to 10 significant digits and printed without trailing
/// zeros, which hides the noise of `k * spacing` (`0.30000000000000004`
/// prints as `0.3`).
#[must_use]
pub fn format_label(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    let magnitude = value.abs();
    if magnitude >= 1e6 || (magnitude < 0.01 && value != 0.0) {
        return exponential(value);
    }
    // `{:.9e}` keeps 10 significant digits; parsing it back drops the rest.
    let rounded: f64 = format!("{value:.9e}").parse().unwrap_or(value);
    if rounded == 0.0 {
        // Covers -0.0.
        return "0".to_owned();
    }
    rounded.to_string()
}

/// One fractional mantissa digit and a signed exponent, ties rounded away
/// from zero.
fn exponential(value: f64) -> String {
    let shortest = format!("{value:e}");
    let (digits, exp) = shortest.split_once('e').unwrap_or((shortest.as_str(), "0"));
    let Ok(mut exp) = exp.parse::<i32>() else {
        return format!("{value:.1e}");
    };
    if exp < 0 {
        // No exact decimal ties below 0.01, so exact rounding agrees.
        return format!("{value:.1e}");
    }
    // `{:e}` would round exact ties to even; round the shortest digits instead.
    let mut significant = digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| u32::from(b - b'0'));
    let mut tenths = significant.next().unwrap_or(0) * 10 + significant.next().unwrap_or(0);
    if significant.next().is_some_and(|d| d >= 5) {
        tenths += 1;
    }
    if tenths >= 100 {
        tenths /= 10;
        exp += 1;
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}.{}e+{exp}", tenths / 10, tenths % 10)
}

#[cfg(test)]
mod tests {
    use super::format_label;

    #[test]
    fn plain_values() {
        assert_eq!(format_label(0.5), "0.5");
        assert_eq!(format_label(1.0), "1");
        assert_eq!(format_label(-2.0), "-2");
        assert_eq!(format_label(250.0), "250");
        assert_eq!(format_label(0.01), "0.01");
        assert_eq!(format_label(999_999.0), "999999");
    }

    #[test]
    fn rounding_hides_float_noise() {
        assert_eq!(format_label(1.0000000001), "1");
        assert_eq!(format_label(3.0 * 0.1), "0.3");
        assert_eq!(format_label(-7.0 * 0.2), "-1.4");
    }

    #[test]
    fn large_and_small_values_are_exponential() {
        assert_eq!(format_label(1_500_000.0), "1.5e+6");
        assert_eq!(format_label(1e6), "1.0e+6");
        assert_eq!(format_label(-2e7), "-2.0e+7");
        assert_eq!(format_label(0.005), "5.0e-3");
        assert_eq!(format_label(-0.0002), "-2.0e-4");
    }

    #[test]
    fn exponent_ties_round_away_from_zero() {
        assert_eq!(format_label(1_250_000.0), "1.3e+6");
        assert_eq!(format_label(2_450_000.0), "2.5e+6");
        assert_eq!(format_label(-1_250_000.0), "-1.3e+6");
        assert_eq!(format_label(0.0025), "2.5e-3");
        assert_eq!(format_label(9_960_000.0), "1.0e+7");
    }

    #[test]
    fn zero_is_plain() {
        assert_eq!(format_label(0.0), "0");
        assert_eq!(format_label(-0.0), "0");
    }

    #[test]
    fn non_finite() {
        assert_eq!(format_label(f64::NAN), "NaN");
        assert_eq!(format_label(f64::INFINITY), "Infinity");
        assert_eq!(format_label(f64::NEG_INFINITY), "-Infinity");
    }
}
