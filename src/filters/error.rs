use std::net::AddrParseError;
use thiserror::Error;

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unrecognized type <{actual}> for {filter} filter <{parameter}>")]
    InvalidArgument {
        filter: &'static str,
        parameter: &'static str,
        actual: &'static str,
    },
    #[error("Invalid IP address '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: AddrParseError,
    },
    #[error("Unrecognized IP address version: {0}")]
    UnsupportedFamily(u8),
    #[error("Prefix length {cidr} out of range (0-{max})")]
    PrefixOutOfRange { cidr: i64, max: u32 },
}
