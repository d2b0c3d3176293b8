//! Network-address sample evaluators (MAC and IP).

use std::net::IpAddr;

/// Accepts MAC addresses as six hex byte-pairs joined by one uniform
/// separator; each separator is independently enableable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacAddressType {
    /// Accept `00:11:22:33:44:55`.
    pub allow_colon: bool,
    /// Accept `00-11-22-33-44-55`.
    pub allow_dash: bool,
    /// Accept `00.11.22.33.44.55`.
    pub allow_dot: bool,
}

impl Default for MacAddressType {
    fn default() -> Self {
        Self {
            allow_colon: true,
            allow_dash: true,
            allow_dot: true,
        }
    }
}

impl MacAddressType {
    pub fn accepts(&self, value: &str) -> bool {
        let v = value.trim();
        [
            (':', self.allow_colon),
            ('-', self.allow_dash),
            ('.', self.allow_dot),
        ]
        .iter()
        .any(|&(sep, enabled)| enabled && Self::matches_with(v, sep))
    }

    fn matches_with(value: &str, sep: char) -> bool {
        let groups: Vec<&str> = value.split(sep).collect();
        groups.len() == 6
            && groups
                .iter()
                .all(|g| g.len() == 2 && g.chars().all(|c| c.is_ascii_hexdigit()))
    }
}

/// Accepts standard textual IP literals via `std::net::IpAddr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpAddressType {
    /// Accept IPv6 literals in addition to dotted-quad IPv4.
    pub allow_ipv6: bool,
}

impl Default for IpAddressType {
    fn default() -> Self {
        Self { allow_ipv6: true }
    }
}

impl IpAddressType {
    pub fn accepts(&self, value: &str) -> bool {
        match value.trim().parse::<IpAddr>() {
            Ok(IpAddr::V4(_)) => true,
            Ok(IpAddr::V6(_)) => self.allow_ipv6,
            Err(_) => false,
        }
    }
}
