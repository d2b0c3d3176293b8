//! Date-time sample evaluator.
//!
//! chrono carries no locale database, so a culture is modelled as a named,
//! finite list of format strings. The shipped set covers the invariant
//! ISO 8601 shapes plus the common US/UK/German/French date orders;
//! callers may replace or extend the list per field.

use chrono::{NaiveDate, NaiveDateTime};

/// A named set of date/date-time format strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Culture {
    pub id: String,
    pub formats: Vec<String>,
}

impl Culture {
    pub fn new(id: &str, formats: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            formats: formats.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// The default culture set, invariant first.
pub fn default_cultures() -> Vec<Culture> {
    vec![
        Culture::new(
            "invariant",
            &[
                "%Y-%m-%dT%H:%M:%S%.f",
                "%Y-%m-%dT%H:%M:%S",
                "%Y-%m-%d %H:%M:%S",
                "%Y-%m-%d",
            ],
        ),
        Culture::new(
            "en-US",
            &["%m/%d/%Y %I:%M:%S %p", "%m/%d/%Y %H:%M:%S", "%m/%d/%Y"],
        ),
        Culture::new("en-GB", &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y"]),
        Culture::new("de-DE", &["%d.%m.%Y %H:%M:%S", "%d.%m.%Y"]),
        Culture::new("fr-FR", &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y"]),
    ]
}

/// Accepts values parseable under any enabled culture's grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeType {
    pub cultures: Vec<Culture>,
}

impl Default for DateTimeType {
    fn default() -> Self {
        Self {
            cultures: default_cultures(),
        }
    }
}

impl DateTimeType {
    pub fn accepts(&self, value: &str) -> bool {
        let v = value.trim();
        if v.is_empty() {
            return false;
        }
        self.cultures
            .iter()
            .flat_map(|c| c.formats.iter())
            .any(|f| parses_with(v, f))
    }
}

fn parses_with(value: &str, format: &str) -> bool {
    // A format without a time component must parse as a bare date.
    if format.contains("%H") || format.contains("%I") {
        NaiveDateTime::parse_from_str(value, format).is_ok()
    } else {
        NaiveDate::parse_from_str(value, format).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_shapes() {
        let t = DateTimeType::default();
        assert!(t.accepts("2024-03-01T12:30:45"));
        assert!(t.accepts("2024-03-01 12:30:45"));
        assert!(t.accepts("2024-03-01"));
    }

    #[test]
    fn culture_specific_shapes() {
        let t = DateTimeType::default();
        assert!(t.accepts("3/14/2024"));
        assert!(t.accepts("3/14/2024 02:15:00 PM"));
        assert!(t.accepts("14.03.2024"));
        assert!(t.accepts("14/03/2024 09:00:00"));
    }

    #[test]
    fn restricting_cultures_changes_acceptance() {
        let t = DateTimeType {
            cultures: default_cultures()
                .into_iter()
                .filter(|c| c.id == "invariant")
                .collect(),
        };
        assert!(t.accepts("2024-03-01"));
        assert!(!t.accepts("14.03.2024"));
    }

    #[test]
    fn non_dates_rejected() {
        let t = DateTimeType::default();
        assert!(!t.accepts("hello"));
        assert!(!t.accepts("42"));
        assert!(!t.accepts("2024-13-01"));
        assert!(!t.accepts(""));
    }
}
