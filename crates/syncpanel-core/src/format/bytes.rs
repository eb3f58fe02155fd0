//! Binary (1024-based) byte size labels.

const UNIT: u64 = 1024;
const SIZES: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count as `"<magnitude> <unit>"` with one decimal place.
///
/// Zero is special-cased to `"0 B"`. Counts of 1024 GB and above stay in GB
/// (`"2048.0 GB"`) since there is no larger unit in the scale.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let index = unit_index(bytes);
    #[allow(clippy::cast_precision_loss)]
    let magnitude = bytes as f64 / (UNIT.pow(index) as f64);
    format!("{magnitude:.1} {}", SIZES[index as usize])
}

/// `floor(log_1024(bytes))`, clamped to the last unit.
fn unit_index(bytes: u64) -> u32 {
    const LAST: u32 = SIZES.len() as u32 - 1;

    let mut index = 0;
    let mut remaining = bytes;
    while remaining >= UNIT && index < LAST {
        remaining /= UNIT;
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_special_cased() {
        assert_eq!(format_file_size(0), "0 B");
    }

    #[test]
    fn binary_units() {
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_576), "1.0 MB");
        assert_eq!(format_file_size(1_073_741_824), "1.0 GB");
    }

    #[test]
    fn sub_kilobyte_counts_keep_one_decimal() {
        assert_eq!(format_file_size(1), "1.0 B");
        assert_eq!(format_file_size(512), "512.0 B");
        assert_eq!(format_file_size(1023), "1023.0 B");
    }

    #[test]
    fn unit_boundary_just_below_next_unit() {
        // 1_048_575 / 1024 = 1023.999..., still KB
        assert_eq!(format_file_size(1_048_575), "1024.0 KB");
    }

    #[test]
    fn clamps_to_gigabytes() {
        assert_eq!(format_file_size(1024_u64.pow(4)), "1024.0 GB");
        assert_eq!(format_file_size(2 * 1024_u64.pow(4)), "2048.0 GB");
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(format_file_size(123_456_789), format_file_size(123_456_789));
        assert_eq!(format_file_size(123_456_789), "117.7 MB");
    }
}
