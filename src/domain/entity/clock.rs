/// Format a number of seconds as `MM:SS`. Minutes are not rolled over into
/// hours.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_padding() {
        let cases = [
            (0, "00:00"),
            (5, "00:05"),
            (59, "00:59"),
            (60, "01:00"),
            (65, "01:05"),
            (1500, "25:00"),
        ];
        for (seconds, expected) in cases {
            assert_eq!(format_time(seconds), expected);
        }
    }
}
