// Author: Dustin Pilgrim
// License: MIT

use crate::core::error::ConfigError;
use crate::core::state::{MAX_TIMERS, TimerSet};
use crate::core::timer::Timer;

/// Longest accepted timer name, in bytes.
pub const MAX_NAME_LEN: usize = 80;

/// Parse the timer definition text.
///
/// Grammar, per line:
///   - `# ...` and blank lines are skipped
///   - `<name>=<N>M` defines a timer: `name` is anything without `=`,
///     `N` is a non-negative whole number of minutes, the trailing `M`
///     is required and ends the line
///
/// Anything else fails the whole load with the offending line number and
/// content. Line order fixes slot order.
pub fn parse(text: &str) -> Result<TimerSet, ConfigError> {
    let mut timers: Vec<Timer> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (name, minutes) = parse_timer_line(line).ok_or_else(|| ConfigError::Parse {
            line: line_no,
            content: line.to_string(),
        })?;

        if name.len() > MAX_NAME_LEN {
            return Err(ConfigError::NameTooLong {
                line: line_no,
                name: name.to_string(),
            });
        }

        timers.push(Timer::new(name, minutes));
    }

    if timers.is_empty() {
        return Err(ConfigError::Empty);
    }
    if timers.len() > MAX_TIMERS {
        return Err(ConfigError::CapacityExceeded {
            count: timers.len(),
        });
    }

    Ok(TimerSet::new(timers))
}

/// One definition line, already trimmed of line endings. None on any
/// mismatch; the caller attaches the line number.
fn parse_timer_line(line: &str) -> Option<(&str, u64)> {
    let (name, value) = line.split_once('=')?;
    if name.is_empty() {
        return None;
    }

    let minutes = value.strip_suffix('M')?.parse::<u64>().ok()?;
    Some((name, minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_definitions_and_skips_comments() {
        let set = parse("A=5M\n#c\nB=10M\n").unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.timers()[0].name(), "A");
        assert_eq!(set.timers()[0].remaining_seconds(), 300);
        assert!(!set.timers()[0].running());
        assert_eq!(set.timers()[1].name(), "B");
        assert_eq!(set.timers()[1].remaining_seconds(), 600);
        assert!(!set.timers()[1].running());
    }

    #[test]
    fn skips_blank_lines() {
        let set = parse("A=5M\n\n\nB=1M\n").unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn handles_crlf_endings() {
        let set = parse("A=5M\r\nB=1M\r\n").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.timers()[1].name(), "B");
    }

    #[test]
    fn zero_minutes_is_valid() {
        let set = parse("done=0M\n").unwrap();
        assert_eq!(set.timers()[0].remaining_seconds(), 0);
    }

    #[test]
    fn garbage_line_fails_with_its_number_and_content() {
        let err = parse("garbage\n").unwrap_err();
        assert_eq!(
            err,
            ConfigError::Parse {
                line: 1,
                content: "garbage".to_string(),
            }
        );
    }

    #[test]
    fn parse_error_cites_the_right_line() {
        let err = parse("A=5M\n#ok\nB=5\n").unwrap_err();
        assert_eq!(
            err,
            ConfigError::Parse {
                line: 3,
                content: "B=5".to_string(),
            }
        );
    }

    #[test]
    fn missing_unit_marker_fails() {
        assert!(matches!(
            parse("A=5\n").unwrap_err(),
            ConfigError::Parse { line: 1, .. }
        ));
    }

    #[test]
    fn negative_minutes_fail() {
        assert!(matches!(
            parse("A=-5M\n").unwrap_err(),
            ConfigError::Parse { line: 1, .. }
        ));
    }

    #[test]
    fn empty_name_fails() {
        assert!(matches!(
            parse("=5M\n").unwrap_err(),
            ConfigError::Parse { line: 1, .. }
        ));
    }

    #[test]
    fn trailing_text_after_marker_fails() {
        assert!(matches!(
            parse("A=5Mx\n").unwrap_err(),
            ConfigError::Parse { line: 1, .. }
        ));
    }

    #[test]
    fn only_comments_is_an_empty_config() {
        assert_eq!(parse("# only comments\n").unwrap_err(), ConfigError::Empty);
        assert_eq!(parse("").unwrap_err(), ConfigError::Empty);
    }

    #[test]
    fn over_capacity_fails_without_truncation() {
        let text: String = (0..10).map(|i| format!("t{i}=1M\n")).collect();
        assert_eq!(
            parse(&text).unwrap_err(),
            ConfigError::CapacityExceeded { count: 10 }
        );
    }

    #[test]
    fn capacity_boundary_is_accepted() {
        let text: String = (0..MAX_TIMERS).map(|i| format!("t{i}=1M\n")).collect();
        assert_eq!(parse(&text).unwrap().len(), MAX_TIMERS);
    }

    #[test]
    fn overlong_name_fails() {
        let text = format!("{}=5M\n", "n".repeat(MAX_NAME_LEN + 1));
        assert!(matches!(
            parse(&text).unwrap_err(),
            ConfigError::NameTooLong { line: 1, .. }
        ));
    }

    #[test]
    fn name_may_contain_spaces_but_not_equals() {
        let set = parse("deep work=25M\n").unwrap();
        assert_eq!(set.timers()[0].name(), "deep work");

        // the first '=' splits; the remainder is not a valid value
        assert!(matches!(
            parse("a=b=5M\n").unwrap_err(),
            ConfigError::Parse { line: 1, .. }
        ));
    }
}
