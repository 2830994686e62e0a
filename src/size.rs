use crate::number::format_number;

/// Size of one storage segment in bytes.
pub const SEGMENT_BYTES: u64 = 1024;

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;

/// Render a segment count as a human-readable size string.
///
/// Uses the default number separators. The Kb comparison is strict: a
/// single 1024-byte segment still renders as `"< 1 Kb"` (kept as-is for
/// compatibility with existing listings).
pub fn format_size(segments: u64) -> String {
    let bytes = segments as f64 * SEGMENT_BYTES as f64;

    if bytes >= GB {
        format!("{} Gb", format_number(bytes / GB, 2))
    } else if bytes >= MB {
        format!("{} Mb", format_number(bytes / MB, 2))
    } else if bytes > KB {
        format!("{} Kb", format_number(bytes / KB, 0))
    } else {
        "< 1 Kb".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_one_segment_stay_below_a_kilobyte() {
        assert_eq!(format_size(0), "< 1 Kb");
        assert_eq!(format_size(1), "< 1 Kb");
    }

    #[test]
    fn kilobyte_range_uses_whole_numbers() {
        assert_eq!(format_size(2), "2 Kb");
        assert_eq!(format_size(100), "100 Kb");
        assert_eq!(format_size(1023), "1.023 Kb");
    }

    #[test]
    fn megabyte_range_uses_two_decimals() {
        assert_eq!(format_size(1024), "1,00 Mb");
        assert_eq!(format_size(1536), "1,50 Mb");
        assert_eq!(format_size(5000), "4,88 Mb");
    }

    #[test]
    fn gigabyte_range_uses_two_decimals() {
        assert_eq!(format_size(1024 * 1024), "1,00 Gb");
        assert_eq!(format_size(1024 * 1024 + 512 * 1024), "1,50 Gb");
    }
}
