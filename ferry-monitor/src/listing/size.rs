//! Human-readable byte sizes

const STEP: f64 = 1024.0;
const UNITS: [&str; 8] = ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Formats a byte count with binary scaling
///
/// Under 1024 bytes the count is printed as is (`512B`). Otherwise it is
/// divided by 1024 until below 1024 or out of units, and printed with exactly
/// one decimal (`2.0kB`, `1.3kB` for 1280 bytes; halves round away from zero).
pub fn human_file_size(bytes: i64) -> String {
    if bytes.unsigned_abs() < STEP as u64 {
        return format!("{}B", bytes);
    }

    let mut value = bytes as f64 / STEP;
    let mut unit = 0;
    while value.abs() >= STEP && unit < UNITS.len() - 1 {
        value /= STEP;
        unit += 1;
    }

    format!("{:.1}{}", round_one_decimal(value), UNITS[unit])
}

/// `{:.1}` rounds halves to even; sizes round them away from zero
fn round_one_decimal(value: f64) -> f64 {
    value.signum() * (value.abs() * 10.0 + 0.5).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_sizes_are_integers() {
        assert_eq!(human_file_size(0), "0B");
        assert_eq!(human_file_size(1), "1B");
        assert_eq!(human_file_size(1023), "1023B");
        assert_eq!(human_file_size(-1023), "-1023B");
    }

    #[test]
    fn test_scaled_sizes_have_one_decimal() {
        assert_eq!(human_file_size(1024), "1.0kB");
        assert_eq!(human_file_size(2048), "2.0kB");
        assert_eq!(human_file_size(1536), "1.5kB");
        assert_eq!(human_file_size(1280), "1.3kB");
        assert_eq!(human_file_size(1_048_575), "1024.0kB");
        assert_eq!(human_file_size(1_048_576), "1.0MB");
        assert_eq!(human_file_size(5 * 1024 * 1024 * 1024), "5.0GB");
        assert_eq!(human_file_size(-1536), "-1.5kB");
    }

    #[test]
    fn test_largest_unit_is_not_exceeded() {
        assert_eq!(human_file_size(i64::MAX), "8.0EB");
        assert_eq!(human_file_size(i64::MIN), "-8.0EB");
    }
}
