//! Duration (time-span) sample evaluator.

use once_cell::sync::Lazy;
use regex::Regex;

static SPAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(?:(\d{1,7})\.)?(\d{1,2}):(\d{1,2})(?::(\d{1,2})(?:\.(\d{1,7}))?)?$")
        .expect("valid time-span pattern")
});

/// Accepts `[-][d.]hh:mm[:ss[.frac]]` duration literals.
///
/// Hours, minutes and seconds are range-checked (0-23 / 0-59 / 0-59); the
/// day component and the fractional-second component are independently
/// gated. Bare numbers never match, so plain integer samples stay with
/// the integer evaluators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSpanType {
    /// Accept a `d.` day prefix.
    pub allow_days: bool,
    /// Accept a fractional-second suffix.
    pub allow_fraction: bool,
}

impl Default for TimeSpanType {
    fn default() -> Self {
        Self {
            allow_days: true,
            allow_fraction: true,
        }
    }
}

impl TimeSpanType {
    pub fn accepts(&self, value: &str) -> bool {
        let Some(caps) = SPAN_RE.captures(value.trim()) else {
            return false;
        };
        if caps.get(1).is_some() && !self.allow_days {
            return false;
        }
        if caps.get(5).is_some() && !self.allow_fraction {
            return false;
        }
        let in_range = |idx: usize, max: u32| {
            caps.get(idx)
                .is_none_or(|m| m.as_str().parse::<u32>().is_ok_and(|v| v <= max))
        };
        in_range(2, 23) && in_range(3, 59) && in_range(4, 59)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_spans() {
        let t = TimeSpanType::default();
        assert!(t.accepts("12:30"));
        assert!(t.accepts("12:30:45"));
        assert!(t.accepts("-06:15"));
        assert!(t.accepts("3.12:30:45"));
        assert!(t.accepts("00:00:00.1234567"));
    }

    #[test]
    fn component_ranges() {
        let t = TimeSpanType::default();
        assert!(!t.accepts("24:00"));
        assert!(!t.accepts("12:60"));
        assert!(!t.accepts("12:30:60"));
    }

    #[test]
    fn gates() {
        let t = TimeSpanType {
            allow_days: false,
            allow_fraction: false,
        };
        assert!(t.accepts("12:30:45"));
        assert!(!t.accepts("3.12:30:45"));
        assert!(!t.accepts("12:30:45.5"));
    }

    #[test]
    fn bare_numbers_rejected() {
        let t = TimeSpanType::default();
        assert!(!t.accepts("5"));
        assert!(!t.accepts("1.5"));
        assert!(!t.accepts(""));
    }
}
