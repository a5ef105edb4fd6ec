//! Number formatting for timer readouts.
//!
//! Shared by anything that prints resolved auras as text, so countdowns look
//! the same everywhere.

/// Format a timer value in seconds.
///
/// - Values >= 60s: `M:SS`
/// - Values >= 10s: whole seconds
/// - Values < 10s: one decimal place
/// - Values <= 0: the provided `zero_label`
///
/// # Examples
/// ```
/// use auralyte_types::formatting::format_countdown;
/// assert_eq!(format_countdown(75.3, "0:00"), "1:15");
/// assert_eq!(format_countdown(15.7, "0:00"), "16");
/// assert_eq!(format_countdown(3.5, "0:00"), "3.5");
/// assert_eq!(format_countdown(0.0, "Ready"), "Ready");
/// ```
pub fn format_countdown(secs: f32, zero_label: &str) -> String {
    if secs <= 0.0 || !secs.is_finite() {
        return zero_label.to_string();
    }
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor() as u32;
        let rest = (secs % 60.0).floor() as u32;
        format!("{}:{:02}", mins, rest)
    } else if secs >= 10.0 {
        format!("{:.0}", secs)
    } else {
        format!("{:.1}", secs)
    }
}

/// Format timer progress as `value/max`, or just `value` when the max is unknown.
///
/// # Examples
/// ```
/// use auralyte_types::formatting::format_progress;
/// assert_eq!(format_progress(5.0, Some(20.0)), "5.0/20");
/// assert_eq!(format_progress(0.0, None), "-");
/// ```
pub fn format_progress(value: f32, max: Option<f32>) -> String {
    match max {
        Some(max) if max > 0.0 => {
            format!("{}/{}", format_countdown(value, "0.0"), format_countdown(max, "0"))
        }
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(75.3, "0:00"), "1:15");
        assert_eq!(format_countdown(60.0, "0:00"), "1:00");
        assert_eq!(format_countdown(15.7, "0:00"), "16");
        assert_eq!(format_countdown(9.94, "0:00"), "9.9");
        assert_eq!(format_countdown(-1.0, "Ready"), "Ready");
        assert_eq!(format_countdown(f32::NAN, "Ready"), "Ready");
    }

    #[test]
    fn test_format_progress() {
        assert_eq!(format_progress(25.0, Some(40.0)), "25/40");
        assert_eq!(format_progress(0.0, Some(40.0)), "0.0/40");
        assert_eq!(format_progress(3.0, Some(0.0)), "-");
    }
}
