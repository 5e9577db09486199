//! Display formatting for numeric asset fields (en-US conventions).

/// Shown for any missing or non-numeric value.
pub const PLACEHOLDER: &str = "—";

/// Compact suffixes, smallest first.
const COMPACT_UNITS: [(f64, &str); 4] = [(1e3, "K"), (1e6, "M"), (1e9, "B"), (1e12, "T")];

/// `1234.5` → `$1,234.50`.
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("${}", group_thousands(&format!("{:.2}", round_cents(value)))),
        None => PLACEHOLDER.to_string(),
    }
}

/// `1234567` → `$1.23M`.
pub fn format_usd_compact(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("${}", format_compact(value)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Compact notation without a currency sign; `999` stays `999`.
pub fn format_quantity(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), format_compact)
}

/// Short-scale compact notation with at most two fraction digits.
///
/// A value that rounds up to 1000 of one unit is expressed in the next one
/// (`999_999` → `1M`). Past `T` the integer part is grouped (`1,500T`).
pub fn format_compact(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let mut unit = COMPACT_UNITS
        .iter()
        .rposition(|(threshold, _)| magnitude >= *threshold);

    loop {
        let (divisor, suffix) = unit.map_or((1.0, ""), |idx| COMPACT_UNITS[idx]);
        let rounded = trim_fraction(&format!("{:.2}", round_cents(magnitude / divisor)));
        let next = unit.map_or(0, |idx| idx + 1);
        let overflowed = rounded.parse::<f64>().is_ok_and(|r| r >= 1000.0);
        if overflowed && next < COMPACT_UNITS.len() {
            unit = Some(next);
            continue;
        }
        if rounded == "0" {
            return rounded;
        }
        return format!("{sign}{}{suffix}", group_thousands(&rounded));
    }
}

/// Rounds to two decimals, ties away from zero (`1.125` → `1.13`).
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn trim_fraction(number: &str) -> String {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        number.to_string()
    }
}

fn group_thousands(number: &str) -> String {
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(number.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
