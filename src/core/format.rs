//! Indonesian locale formatters.
//!
//! Currency is Rupiah with a `"Rp. "` prefix, dot-grouped thousands, and a
//! comma decimal separator; whole amounts drop the `,00`. Dates render in
//! Indonesian long form. These are display helpers only - totals stay
//! full-precision until they reach one of these functions.

use chrono::{DateTime, Datelike, Timelike, Utc};

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Formats an amount as Rupiah, e.g. `Rp. 1.234.567` or `Rp. 1.234,50`.
///
/// The amount is rounded to whole cents; a zero fractional part is dropped.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_rupiah(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let negative = cents < 0;
    let cents = cents.abs();
    let whole = cents / 100;
    let frac = cents % 100;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str("Rp. ");
    out.push_str(&group_thousands(whole));
    if frac != 0 {
        out.push(',');
        out.push_str(&format!("{frac:02}"));
    }
    out
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

/// Formats an area size with three decimals and a comma separator, e.g.
/// `1,500` for 1.5 square meters.
#[must_use]
pub fn format_area(size: f64) -> String {
    format!("{size:.3}").replace('.', ",")
}

/// Formats a timestamp in Indonesian long form, e.g.
/// `29 Agustus 2026 pukul 14.30`.
#[must_use]
pub fn format_date_id(timestamp: &DateTime<Utc>) -> String {
    format!(
        "{} {} {} pukul {:02}.{:02}",
        timestamp.day(),
        MONTHS_ID[timestamp.month0() as usize],
        timestamp.year(),
        timestamp.hour(),
        timestamp.minute(),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::TimeZone as _;

    #[test]
    fn test_rupiah_groups_thousands_with_dots() {
        assert_eq!(format_rupiah(1_234_567.0), "Rp. 1.234.567");
    }

    #[test]
    fn test_rupiah_drops_zero_cents() {
        assert_eq!(format_rupiah(150_000.0), "Rp. 150.000");
    }

    #[test]
    fn test_rupiah_keeps_nonzero_cents_with_comma() {
        assert_eq!(format_rupiah(1_234.5), "Rp. 1.234,50");
    }

    #[test]
    fn test_rupiah_small_amounts() {
        assert_eq!(format_rupiah(0.0), "Rp. 0");
        assert_eq!(format_rupiah(999.0), "Rp. 999");
    }

    #[test]
    fn test_rupiah_negative_amounts() {
        assert_eq!(format_rupiah(-25_000.0), "-Rp. 25.000");
    }

    #[test]
    fn test_area_uses_comma_separator() {
        assert_eq!(format_area(1.5), "1,500");
        assert_eq!(format_area(0.5), "0,500");
        assert_eq!(format_area(2.0), "2,000");
    }

    #[test]
    fn test_date_renders_indonesian_long_form() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 29, 14, 30, 0).unwrap();
        assert_eq!(format_date_id(&ts), "29 Agustus 2026 pukul 14.30");
    }

    #[test]
    fn test_date_in_january() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 3, 9, 5, 0).unwrap();
        assert_eq!(format_date_id(&ts), "3 Januari 2025 pukul 09.05");
    }
}
