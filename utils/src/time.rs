//! Time formatting helpers.

/// Format a duration in seconds to a human-readable string.
pub fn format_duration(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else if secs % 86400 == 0 {
        format!("{}d", secs / 86400)
    } else {
        format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_each_unit() {
        assert_eq!(format_duration(45), "45s");
        assert_eq!(format_duration(900), "15m 0s");
        assert_eq!(format_duration(5400), "1h 30m");
        assert_eq!(format_duration(259_200), "3d");
        assert_eq!(format_duration(90_000), "1d 1h");
    }
}
