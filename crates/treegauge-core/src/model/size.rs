/// Display formatting for byte counts and entry counts.
///
/// Counters are `u64` everywhere in the model; floating point only appears
/// here, at the formatting boundary. Binary units (1024) with the short
/// labels users expect from disk tools.

/// Format a byte count with an appropriate unit (B, KB, MB, GB, TB).
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    // Two decimals from GB up, one below.
    let precision = if unit >= 3 { 2 } else { 1 };
    format!("{value:.precision$} {}", UNITS[unit])
}

/// Format a count with thousands separators (`1234567` → `1,234,567`).
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let first_group = match digits.len() % 3 {
        0 => 3,
        n => n,
    };
    for (i, ch) in digits.chars().enumerate() {
        if i >= first_group && (i - first_group) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
