use std::fmt::Write;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Octet labels of an IPv4 address, most specific first
pub fn ipv4_labels(ip: Ipv4Addr) -> Vec<String> {
    ip.octets().iter().rev().map(ToString::to_string).collect()
}

/// Nibble labels of an IPv6 address, most specific first
pub fn ipv6_labels(ip: &Ipv6Addr) -> Vec<String> {
    // Expanded hex representation without colons
    let mut expanded = String::with_capacity(32); // 8 segments × 4 chars each
    for segment in ip.segments() {
        let _ = write!(expanded, "{segment:04x}");
    }

    expanded.chars().rev().map(String::from).collect()
}

pub fn address_labels(ip: &IpAddr) -> Vec<String> {
    match ip {
        IpAddr::V4(ipv4) => ipv4_labels(*ipv4),
        IpAddr::V6(ipv6) => ipv6_labels(ipv6),
    }
}
