use super::{Filter, args::FilterArgs, error::FilterError, reverse_pointer::parse_ip};
use crate::network::{reverse_name::ReverseName, types::AddressFamily};

/// Number of leading labels to drop from the reverse name for a prefix of
/// `cidr` bits. A label only partly covered by the prefix is kept.
pub fn split_count(family: AddressFamily, cidr: i64) -> Result<usize, FilterError> {
    let max = family.bit_width();
    let prefix = u32::try_from(cidr)
        .ok()
        .filter(|prefix| *prefix <= max)
        .ok_or(FilterError::PrefixOutOfRange { cidr, max })?;

    Ok(((max - prefix) / family.label_bits()) as usize)
}

/// Reverse zone enclosing `ip` at a prefix length of `cidr` bits
pub fn reverse_pointer_zone(ip: &str, cidr: i64) -> Result<String, FilterError> {
    let address = parse_ip(ip)?;
    let family = AddressFamily::of(&address);
    let split_count = split_count(family, cidr)?;

    Ok(ReverseName::new(&address).truncate(split_count).to_string())
}

pub fn reverse_pointer_zone_value(args: &FilterArgs) -> Result<String, FilterError> {
    let ip = args.require_str(Filter::ReversePointerZone, "ip")?;
    let cidr = args.require_int(Filter::ReversePointerZone, "cidr")?;
    reverse_pointer_zone(ip, cidr)
}
