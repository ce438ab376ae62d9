// Number formatting for determination reasons

/// Formats an integer with comma thousands separators (`1234567` -> `1,234,567`)
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a whole-dollar amount (`30000000` -> `$30,000,000`)
pub fn format_dollars(value: u64) -> String {
    format!("${}", group_thousands(value))
}
