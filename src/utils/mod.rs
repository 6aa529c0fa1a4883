/// Formats a duration in seconds as `m:ss` for display. The upstream source
/// does not distinguish a zero duration from an unknown one, so `None` is
/// rendered as "unknown" rather than "0:00".
pub fn format_duration(seconds: Option<u64>) -> String {
    match seconds {
        Some(secs) => format!("{}:{:02}", secs / 60, secs % 60),
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Some(0)), "0:00");
        assert_eq!(format_duration(Some(9)), "0:09");
        assert_eq!(format_duration(Some(59)), "0:59");
        assert_eq!(format_duration(Some(60)), "1:00");
        assert_eq!(format_duration(Some(615)), "10:15");
        assert_eq!(format_duration(None), "unknown");
    }
}
