//! Time parsing and formatting utilities

use crate::error::{FrameCutError, FrameCutResult};

/// Parse a time string to seconds.
///
/// Accepts bare seconds (`123.45`), `MM:SS.ms`, or `HH:MM:SS.ms`.
pub fn parse_time(time_str: &str) -> FrameCutResult<f64> {
    let trimmed = time_str.trim();

    if let Ok(seconds) = trimmed.parse::<f64>() {
        if seconds < 0.0 || !seconds.is_finite() {
            return Err(FrameCutError::InvalidTimeFormat {
                time: time_str.to_string(),
            });
        }
        return Ok(seconds);
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    let seconds = match parts.as_slice() {
        [minutes, seconds] => {
            let minutes = parse_component(minutes, time_str)?;
            let seconds = parse_seconds(seconds, time_str)?;
            minutes * 60.0 + seconds
        }
        [hours, minutes, seconds] => {
            let hours = parse_component(hours, time_str)?;
            let minutes = parse_component(minutes, time_str)?;
            let seconds = parse_seconds(seconds, time_str)?;
            if minutes >= 60.0 {
                return Err(FrameCutError::InvalidTimeFormat {
                    time: time_str.to_string(),
                });
            }
            hours * 3600.0 + minutes * 60.0 + seconds
        }
        _ => {
            return Err(FrameCutError::InvalidTimeFormat {
                time: time_str.to_string(),
            })
        }
    };

    Ok(seconds)
}

fn parse_component(part: &str, original: &str) -> FrameCutResult<f64> {
    part.parse::<u32>()
        .map(f64::from)
        .map_err(|_| FrameCutError::InvalidTimeFormat {
            time: original.to_string(),
        })
}

fn parse_seconds(part: &str, original: &str) -> FrameCutResult<f64> {
    let seconds = part
        .parse::<f64>()
        .map_err(|_| FrameCutError::InvalidTimeFormat {
            time: original.to_string(),
        })?;

    if !(0.0..60.0).contains(&seconds) {
        return Err(FrameCutError::InvalidTimeFormat {
            time: original.to_string(),
        });
    }
    Ok(seconds)
}

/// Format seconds as `HH:MM:SS.ms`, omitting the hours field when zero
pub fn format_time(seconds: f64) -> String {
    let hours = (seconds / 3600.0) as u32;
    let minutes = ((seconds % 3600.0) / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    let milliseconds = ((seconds % 1.0) * 1000.0) as u32;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}.{milliseconds:03}")
    } else {
        format!("{minutes:02}:{secs:02}.{milliseconds:03}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_seconds() {
        assert_eq!(parse_time("12.5").unwrap(), 12.5);
        assert_eq!(parse_time(" 0 ").unwrap(), 0.0);
    }

    #[test]
    fn parses_minutes_seconds() {
        assert_eq!(parse_time("2:30.5").unwrap(), 150.5);
        assert_eq!(parse_time("0:05").unwrap(), 5.0);
    }

    #[test]
    fn parses_hours_minutes_seconds() {
        assert_eq!(parse_time("1:02:30.5").unwrap(), 3750.5);
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert!(parse_time("-3").is_err());
        assert!(parse_time("abc").is_err());
        assert!(parse_time("1:99:00").is_err());
        assert!(parse_time("2:75.0").is_err());
        assert!(parse_time("1:2:3:4").is_err());
    }

    #[test]
    fn formats_round_trip_style() {
        assert_eq!(format_time(0.0), "00:00.000");
        assert_eq!(format_time(90.25), "01:30.250");
        assert_eq!(format_time(3750.5), "01:02:30.500");
    }
}
