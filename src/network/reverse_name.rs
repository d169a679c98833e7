use std::fmt;
use std::net::IpAddr;

use super::{types::AddressFamily, util::address_labels};

/// Reverse lookup name of an address: address labels most specific first,
/// followed by the family zone suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReverseName {
    family: AddressFamily,
    labels: Vec<String>,
}

impl ReverseName {
    pub fn new(ip: &IpAddr) -> Self {
        let family = AddressFamily::of(ip);
        let mut labels = address_labels(ip);
        labels.extend(family.zone_suffix().split('.').map(String::from));
        Self { family, labels }
    }

    pub const fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Drops the first `split_count` labels. The zone suffix is never dropped.
    pub fn truncate(&self, split_count: usize) -> Self {
        let address_labels = self.labels.len() - self.suffix_len();
        let skip = split_count.min(address_labels);
        Self {
            family: self.family,
            labels: self.labels[skip..].to_vec(),
        }
    }

    fn suffix_len(&self) -> usize {
        self.family.zone_suffix().split('.').count()
    }
}

impl From<IpAddr> for ReverseName {
    fn from(ip: IpAddr) -> Self {
        Self::new(&ip)
    }
}

impl fmt::Display for ReverseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join("."))
    }
}
