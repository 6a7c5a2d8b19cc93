// File: crates/chart-core/src/format.rs
// Summary: Number formatting for tooltips and axis labels (thousands separators, K/M/B).

/// Format `value` with `,` thousands separators.
///
/// With `use_decimals == false` the value is rounded to an integer first; otherwise the
/// shortest decimal representation is kept (`1234.5` -> `"1,234.5"`).
pub fn format_number(value: f64, use_decimals: bool) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let v = if use_decimals { value } else { value.round() };
    // avoid "-0"
    let v = if v == 0.0 { 0.0 } else { v };
    let raw = v.to_string();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut out = String::with_capacity(raw.len() + int_part.len() / 3);
    out.push_str(sign);
    out.push_str(&group_thousands(int_part));
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Summary form used for axis labels: `1234` -> `"1.2K"`, `2500000` -> `"2.5M"`.
///
/// A value that rounds up to a full 1000 of its unit moves to the next unit
/// (`999_950` -> `"1M"`).
pub fn format_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 3] = [(1e3, "K"), (1e6, "M"), (1e9, "B")];
    if !value.is_finite() {
        return format_number(value, true);
    }
    let Some(mut i) = UNITS.iter().rposition(|(unit, _)| value.abs() >= *unit) else {
        return format_number(value, true);
    };
    let mut scaled = scale_to(value, UNITS[i].0);
    if scaled.abs() >= 1000.0 && i + 1 < UNITS.len() {
        i += 1;
        scaled = scale_to(value, UNITS[i].0);
    }
    format!("{}{}", format_number(scaled, true), UNITS[i].1)
}

/// `value / unit`, rounded to one decimal place.
fn scale_to(value: f64, unit: f64) -> f64 {
    (value / (unit / 10.0)).round() / 10.0
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
