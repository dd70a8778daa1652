/// Trim whitespace and strip a stray leading/trailing quote character.
pub fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.trim().to_string()
}

/// Best-effort numeric coercion. Anything that does not parse to a finite
/// number, including the empty string, becomes exactly zero.
pub fn to_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(num) if num.is_finite() => num,
        _ => 0.0,
    }
}

/// Integer variant of [`to_number`]. Fractional values truncate toward zero.
pub fn to_int(raw: &str) -> i64 {
    to_number(raw) as i64
}

/// Split a `:`-delimited food-item field into its entries, dropping blanks.
pub fn split_items(raw: &str) -> Vec<String> {
    raw.split(':')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
