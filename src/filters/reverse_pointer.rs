use std::net::IpAddr;

use super::{Filter, args::FilterArgs, error::FilterError};
use crate::network::reverse_name::ReverseName;

pub(crate) fn parse_ip(ip: &str) -> Result<IpAddr, FilterError> {
    ip.parse().map_err(|source| FilterError::Parse {
        input: ip.to_string(),
        source,
    })
}

/// Full `in-addr.arpa` or `ip6.arpa` name of an address
pub fn reverse_pointer(ip: &str) -> Result<String, FilterError> {
    let address = parse_ip(ip)?;
    Ok(ReverseName::new(&address).to_string())
}

pub fn reverse_pointer_value(args: &FilterArgs) -> Result<String, FilterError> {
    let ip = args.require_str(Filter::ReversePointer, "ip")?;
    reverse_pointer(ip)
}
