//! Display formatting helpers.

/// Format a call duration as `mm:ss`, zero-padded.
///
/// Minutes are not wrapped at 60: an hour-long call reads `61:01`, which
/// matches the two-digit-but-overflowing duration display.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_both_fields() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(9), "00:09");
        assert_eq!(format_elapsed(59), "00:59");
    }

    #[test]
    fn rolls_over_to_minutes() {
        assert_eq!(format_elapsed(60), "01:00");
        assert_eq!(format_elapsed(754), "12:34");
    }

    #[test]
    fn minutes_are_unbounded() {
        assert_eq!(format_elapsed(3661), "61:01");
        assert_eq!(format_elapsed(6000), "100:00");
    }
}
