use crate::error::{Result, SiftError};

const KIB: u64 = 1024;

/// Parse a human-readable size string like "50MB" or "1.5 GB" into bytes.
///
/// The accepted grammar is a decimal number immediately followed by an
/// optional run of whitespace and one of B, KB, MB, GB or TB
/// (case-insensitive, powers of 1024). Anything else, including a missing
/// unit or trailing garbage, is rejected.
pub fn parse_size(input: &str) -> Result<u64> {
    let text = input.trim().to_ascii_uppercase();

    let split = text
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(text.len());
    let (number, rest) = text.split_at(split);
    let unit = rest.trim_start();

    let multiplier = match unit {
        "B" => 1,
        "KB" => KIB,
        "MB" => KIB.pow(2),
        "GB" => KIB.pow(3),
        "TB" => KIB.pow(4),
        _ => return Err(SiftError::InvalidSizeFormat(input.trim().to_string())),
    };

    if !is_plain_decimal(number) {
        return Err(SiftError::InvalidSizeFormat(input.trim().to_string()));
    }
    let value: f64 = number
        .parse()
        .map_err(|_| SiftError::InvalidSizeFormat(input.trim().to_string()))?;

    Ok((value * multiplier as f64) as u64)
}

/// Digits with at most one interior decimal point; no sign, no exponent.
fn is_plain_decimal(text: &str) -> bool {
    let mut parts = text.splitn(2, '.');
    let integer = parts.next().unwrap_or("");
    if integer.is_empty() || !integer.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match parts.next() {
        None => true,
        Some(fraction) => {
            !fraction.is_empty() && fraction.bytes().all(|b| b.is_ascii_digit())
        }
    }
}

/// Format a byte count as a human-readable string.
///
/// Negative input (an unknown size) renders as "N/A". Everything from 1024
/// up is divided down to the first unit where the value drops below 1024,
/// with two decimal places; PB is the overflow unit.
pub fn format_size(bytes: i64) -> String {
    if bytes < 0 {
        return "N/A".to_string();
    }
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64;
    for unit in ["KB", "MB", "GB", "TB"] {
        size /= 1024.0;
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
    }
    format!("{:.2} PB", size / 1024.0)
}
