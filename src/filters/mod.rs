//! Configuration-template filters for reverse DNS naming.
//!
//! Each filter has a typed entry point (`ending`, `reverse_pointer`,
//! `reverse_pointer_zone`) and a `*_value` entry point that checks loosely
//! typed [`FilterArgs`] first.

pub mod args;
pub mod ending;
pub mod error;
pub mod reverse_pointer;
pub mod reverse_pointer_zone;

use clap::ValueEnum;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

pub use args::FilterArgs;
pub use ending::ending;
pub use error::FilterError;
pub use reverse_pointer::reverse_pointer;
pub use reverse_pointer_zone::reverse_pointer_zone;

#[derive(
    Debug,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    ValueEnum,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Filter {
    #[value(name = "ending")]
    Ending,
    #[value(name = "reverse_pointer")]
    ReversePointer,
    #[value(name = "reverse_pointer_zone")]
    ReversePointerZone,
}

impl Filter {
    /// Name the filter is exposed under in templates
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub const fn parameters(self) -> &'static [&'static str] {
        match self {
            Self::Ending => &["input_string", "end_string"],
            Self::ReversePointer => &["ip"],
            Self::ReversePointerZone => &["ip", "cidr"],
        }
    }

    pub fn apply(self, args: &FilterArgs) -> Result<String, FilterError> {
        match self {
            Self::Ending => ending::ending_value(args),
            Self::ReversePointer => reverse_pointer::reverse_pointer_value(args),
            Self::ReversePointerZone => reverse_pointer_zone::reverse_pointer_zone_value(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn test_filter_names() {
        let names: Vec<&str> = Filter::iter().map(Filter::name).collect();
        assert_eq!(
            names,
            vec!["ending", "reverse_pointer", "reverse_pointer_zone"]
        );
        for filter in Filter::iter() {
            assert_eq!(filter.to_string(), filter.name());
            assert_eq!(filter.name().parse::<Filter>(), Ok(filter));
        }
    }

    #[test]
    fn test_unknown_filter_name() {
        assert!("reverse-pointer".parse::<Filter>().is_err());
        assert!("ipaddr".parse::<Filter>().is_err());
    }

    #[test]
    fn test_apply_dispatch() {
        assert_eq!(
            Filter::Ending
                .apply(&FilterArgs::positional([json!("zone"), json!(".")]))
                .unwrap(),
            "zone."
        );
        assert_eq!(
            Filter::ReversePointer
                .apply(&FilterArgs::positional([json!("10.0.0.1")]))
                .unwrap(),
            "1.0.0.10.in-addr.arpa"
        );
        assert_eq!(
            Filter::ReversePointerZone
                .apply(&FilterArgs::positional([json!("10.0.0.1"), json!(8)]))
                .unwrap(),
            "10.in-addr.arpa"
        );
    }

    #[test]
    fn test_apply_reports_own_filter_name() {
        let error = Filter::ReversePointerZone
            .apply(&FilterArgs::positional([json!("10.0.0.1")]))
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Unrecognized type <missing> for reverse_pointer_zone filter <cidr>"
        );
    }
}
