//! Output Formatting
//!
//! Currency values render with thousands separators and no decimals; ROI
//! renders as a percentage with one decimal place.

/// Format a dollar amount: rounded to whole dollars, comma-grouped.
pub fn usd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.unsigned_abs()))
}

/// Format a ratio as a percentage with one decimal place.
pub fn pct(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let lead = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
