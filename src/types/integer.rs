//! Fixed-width integer sample evaluators.

/// Accepts integer literals for one fixed-width integer kind.
///
/// `min`/`max` default to the natural range of the kind and may be
/// tightened independently. Hexadecimal (`0x` prefix or trailing `h`) and
/// binary (trailing `b`) notations apply to unsigned kinds only; signed
/// kinds only ever read plain decimal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerType {
    pub min: i128,
    pub max: i128,
    /// Accept plain decimal literals.
    pub allow_decimal: bool,
    /// Accept `0x1F` / `1Fh` style literals (unsigned kinds only).
    pub allow_hex: bool,
    /// Accept `1011b` style literals (unsigned kinds only).
    pub allow_binary: bool,
    signed: bool,
}

impl IntegerType {
    /// Evaluator bounded by `[min, max]`; a negative `min` marks the kind
    /// as signed.
    pub fn new(min: i128, max: i128) -> Self {
        Self {
            min,
            max,
            allow_decimal: true,
            allow_hex: true,
            allow_binary: true,
            signed: min < 0,
        }
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    pub fn accepts(&self, value: &str) -> bool {
        let s = value.trim();
        if s.is_empty() {
            return false;
        }
        if !self.signed {
            if self.allow_hex {
                if let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                    return self.in_range(i128::from_str_radix(digits, 16));
                }
                if let Some(digits) = s.strip_suffix(['h', 'H']) {
                    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit()) {
                        return self.in_range(i128::from_str_radix(digits, 16));
                    }
                }
            }
            if self.allow_binary {
                if let Some(digits) = s.strip_suffix(['b', 'B']) {
                    if !digits.is_empty() && digits.bytes().all(|b| b == b'0' || b == b'1') {
                        return self.in_range(i128::from_str_radix(digits, 2));
                    }
                }
            }
        }
        self.allow_decimal && self.in_range(s.parse::<i128>())
    }

    fn in_range(&self, parsed: Result<i128, std::num::ParseIntError>) -> bool {
        parsed.is_ok_and(|v| v >= self.min && v <= self.max)
    }
}
