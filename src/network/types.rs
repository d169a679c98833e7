use std::net::IpAddr;
use strum_macros::Display;

use crate::filters::error::FilterError;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Display, Hash)]
pub enum AddressFamily {
    #[strum(to_string = "IPv4")]
    V4,
    #[strum(to_string = "IPv6")]
    V6,
}

impl AddressFamily {
    pub const fn of(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => Self::V4,
            IpAddr::V6(_) => Self::V6,
        }
    }

    pub const fn version(self) -> u8 {
        match self {
            Self::V4 => 4,
            Self::V6 => 6,
        }
    }

    pub const fn bit_width(self) -> u32 {
        match self {
            Self::V4 => 32,
            Self::V6 => 128,
        }
    }

    /// Number of address bits covered by one label of the reverse name
    pub const fn label_bits(self) -> u32 {
        match self {
            Self::V4 => 8,
            Self::V6 => 4,
        }
    }

    pub const fn zone_suffix(self) -> &'static str {
        match self {
            Self::V4 => "in-addr.arpa",
            Self::V6 => "ip6.arpa",
        }
    }
}

/// For callers holding a raw IP version number. Addresses parsed with
/// `std::net` always map through [`AddressFamily::of`] instead.
impl TryFrom<u8> for AddressFamily {
    type Error = FilterError;

    fn try_from(version: u8) -> Result<Self, Self::Error> {
        match version {
            4 => Ok(Self::V4),
            6 => Ok(Self::V6),
            other => Err(FilterError::UnsupportedFamily(other)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_family_from_address() {
        assert_eq!(
            AddressFamily::of(&"192.0.2.1".parse().unwrap()),
            AddressFamily::V4
        );
        assert_eq!(
            AddressFamily::of(&"2001:db8::1".parse().unwrap()),
            AddressFamily::V6
        );
    }

    #[test]
    fn test_version_round_trip() {
        for family in [AddressFamily::V4, AddressFamily::V6] {
            assert_eq!(AddressFamily::try_from(family.version()).unwrap(), family);
        }
    }

    #[test]
    fn test_unknown_version() {
        assert_eq!(
            AddressFamily::try_from(5),
            Err(FilterError::UnsupportedFamily(5))
        );
        assert_eq!(
            AddressFamily::try_from(0),
            Err(FilterError::UnsupportedFamily(0))
        );
    }

    #[test]
    fn test_label_geometry() {
        assert_eq!(
            AddressFamily::V4.bit_width() / AddressFamily::V4.label_bits(),
            4
        );
        assert_eq!(
            AddressFamily::V6.bit_width() / AddressFamily::V6.label_bits(),
            32
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(AddressFamily::V4.to_string(), "IPv4");
        assert_eq!(AddressFamily::V6.to_string(), "IPv6");
    }
}
