//! Fixed serial-port enumeration evaluators.
//!
//! Two closed enumerations carried over from serial-port configuration
//! vocabularies: stop-bit counts and parity schemes. Unlike the free-form
//! enumeration the member set is fixed; only matching behavior is
//! configurable.

const STOP_BITS: &[(&str, i64)] = &[
    ("None", 0),
    ("One", 1),
    ("Two", 2),
    ("OnePointFive", 3),
];

const PARITY: &[(&str, i64)] = &[
    ("None", 0),
    ("Odd", 1),
    ("Even", 2),
    ("Mark", 3),
    ("Space", 4),
];

/// Accepts enumerator names of one fixed external enumeration and,
/// optionally, the underlying ordinal values as numeric strings.
///
/// Ordinal acceptance defaults off: with it on, small integer samples
/// would rank as enumeration members ahead of every integer kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialEnumType {
    /// Generated enumeration type name.
    pub type_name: &'static str,
    /// Match enumerator names case-insensitively.
    pub case_insensitive: bool,
    /// Also accept ordinal values (`"2"` for `Two`).
    pub allow_ordinals: bool,
    members: &'static [(&'static str, i64)],
}

impl SerialEnumType {
    pub fn stop_bits() -> Self {
        Self {
            type_name: "SerialStopBits",
            case_insensitive: true,
            allow_ordinals: false,
            members: STOP_BITS,
        }
    }

    pub fn parity() -> Self {
        Self {
            type_name: "SerialParity",
            case_insensitive: true,
            allow_ordinals: false,
            members: PARITY,
        }
    }

    /// `(name, ordinal)` pairs of the closed enumeration.
    pub fn members(&self) -> &'static [(&'static str, i64)] {
        self.members
    }

    pub fn accepts(&self, value: &str) -> bool {
        let v = value.trim();
        let name_match = self.members.iter().any(|(name, _)| {
            if self.case_insensitive {
                name.eq_ignore_ascii_case(v)
            } else {
                *name == v
            }
        });
        name_match
            || (self.allow_ordinals
                && v.parse::<i64>()
                    .is_ok_and(|n| self.members.iter().any(|(_, ord)| *ord == n)))
    }
}
