//! Floating-point sample evaluators.

use once_cell::sync::Lazy;
use regex::Regex;

static FLOAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$").expect("valid float pattern")
});

const CURRENCY_SYMBOLS: [char; 3] = ['$', '€', '£'];

/// Accepts floating-point literals for `f32` or `f64`.
///
/// A value must show at least one float marker (decimal point, exponent,
/// percent suffix, currency symbol or parenthesized negative); bare
/// integer literals are left to the integer evaluators so the canonical
/// ranking does not swallow them.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatType {
    /// Accept an `E±dd` exponent.
    pub allow_exponent: bool,
    /// Accept a leading currency symbol (`$`, `€`, `£`).
    pub allow_currency: bool,
    /// Accept a trailing `%`; the value is divided by 100 before the
    /// range check.
    pub allow_percent: bool,
    /// Accept `(1.5)` as negative 1.5.
    pub allow_parentheses: bool,
    pub min: f64,
    pub max: f64,
    double: bool,
}

impl FloatType {
    /// 32-bit evaluator, bounded by the `f32` range.
    pub fn single() -> Self {
        Self {
            allow_exponent: true,
            allow_currency: true,
            allow_percent: true,
            allow_parentheses: true,
            min: f32::MIN as f64,
            max: f32::MAX as f64,
            double: false,
        }
    }

    /// 64-bit evaluator.
    pub fn double() -> Self {
        Self {
            min: f64::MIN,
            max: f64::MAX,
            double: true,
            ..Self::single()
        }
    }

    pub fn is_double(&self) -> bool {
        self.double
    }

    pub fn accepts(&self, value: &str) -> bool {
        let mut s = value.trim();
        let mut marker = false;
        let mut negate = false;
        let mut percent = false;

        if let Some(inner) = s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
            if !self.allow_parentheses {
                return false;
            }
            s = inner.trim();
            negate = true;
            marker = true;
        }
        for sym in CURRENCY_SYMBOLS {
            if let Some(rest) = s.strip_prefix(sym) {
                if !self.allow_currency {
                    return false;
                }
                s = rest.trim_start();
                marker = true;
                break;
            }
        }
        if let Some(rest) = s.strip_suffix('%') {
            if !self.allow_percent {
                return false;
            }
            s = rest.trim_end();
            percent = true;
            marker = true;
        }

        if !FLOAT_RE.is_match(s) {
            return false;
        }
        let has_exponent = s.contains(['e', 'E']);
        if has_exponent && !self.allow_exponent {
            return false;
        }
        if !(marker || has_exponent || s.contains('.')) {
            return false;
        }

        let Ok(mut v) = s.parse::<f64>() else {
            return false;
        };
        if percent {
            v /= 100.0;
        }
        if negate {
            v = -v;
        }
        v.is_finite() && v >= self.min && v <= self.max
    }
}
