use serde_json::{Map, Value};

use super::{Filter, error::FilterError};

/// Loosely typed arguments as handed over by a templating engine: positional
/// values bound to the filter's parameters in order, overlaid by named values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterArgs {
    positional: Vec<Value>,
    named: Map<String, Value>,
}

impl FilterArgs {
    pub const fn new(positional: Vec<Value>, named: Map<String, Value>) -> Self {
        Self { positional, named }
    }

    pub fn positional(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            positional: values.into_iter().collect(),
            named: Map::new(),
        }
    }

    #[must_use]
    pub fn with_named(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.named.insert(name.to_string(), value.into());
        self
    }

    /// Value bound to `parameter`, named arguments taking precedence
    pub fn get(&self, filter: Filter, parameter: &str) -> Option<&Value> {
        self.named.get(parameter).or_else(|| {
            filter
                .parameters()
                .iter()
                .position(|name| *name == parameter)
                .and_then(|index| self.positional.get(index))
        })
    }

    pub fn require_str(
        &self,
        filter: Filter,
        parameter: &'static str,
    ) -> Result<&str, FilterError> {
        match self.get(filter, parameter) {
            Some(Value::String(value)) => Ok(value.as_str()),
            other => Err(invalid_argument(filter, parameter, other)),
        }
    }

    pub fn require_int(
        &self,
        filter: Filter,
        parameter: &'static str,
    ) -> Result<i64, FilterError> {
        match self.get(filter, parameter) {
            // Integers past i64::MAX saturate and are rejected later as out of range
            Some(Value::Number(number)) if !number.is_f64() => {
                Ok(number.as_i64().unwrap_or(i64::MAX))
            }
            other => Err(invalid_argument(filter, parameter, other)),
        }
    }

    /// The arguments bound to each declared parameter of `filter`
    pub fn bound(&self, filter: Filter) -> Map<String, Value> {
        filter
            .parameters()
            .iter()
            .filter_map(|name| {
                self.get(filter, name)
                    .map(|value| ((*name).to_string(), value.clone()))
            })
            .collect()
    }
}

pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn invalid_argument(
    filter: Filter,
    parameter: &'static str,
    value: Option<&Value>,
) -> FilterError {
    FilterError::InvalidArgument {
        filter: filter.name(),
        parameter,
        actual: value.map_or("missing", type_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_positional_binding() {
        let args = FilterArgs::positional([json!("foo"), json!("bar")]);
        assert_eq!(args.require_str(Filter::Ending, "input_string"), Ok("foo"));
        assert_eq!(args.require_str(Filter::Ending, "end_string"), Ok("bar"));
    }

    #[test]
    fn test_named_overrides_positional() {
        let args = FilterArgs::positional([json!("10.0.0.1"), json!(8)]).with_named("cidr", 24);
        assert_eq!(args.require_int(Filter::ReversePointerZone, "cidr"), Ok(24));
        assert_eq!(
            args.require_str(Filter::ReversePointerZone, "ip"),
            Ok("10.0.0.1")
        );
    }

    #[test]
    fn test_missing_argument() {
        let args = FilterArgs::positional([json!("foo")]);
        assert_eq!(
            args.require_str(Filter::Ending, "end_string"),
            Err(FilterError::InvalidArgument {
                filter: "ending",
                parameter: "end_string",
                actual: "missing",
            })
        );
    }

    #[test]
    fn test_wrong_types_named() {
        let args = FilterArgs::positional([json!(42), json!("24")]);
        assert_eq!(
            args.require_str(Filter::ReversePointerZone, "ip"),
            Err(FilterError::InvalidArgument {
                filter: "reverse_pointer_zone",
                parameter: "ip",
                actual: "integer",
            })
        );
        assert_eq!(
            args.require_int(Filter::ReversePointerZone, "cidr"),
            Err(FilterError::InvalidArgument {
                filter: "reverse_pointer_zone",
                parameter: "cidr",
                actual: "string",
            })
        );
    }

    #[test]
    fn test_float_is_not_integer() {
        let args = FilterArgs::default().with_named("cidr", 24.0);
        assert!(matches!(
            args.require_int(Filter::ReversePointerZone, "cidr"),
            Err(FilterError::InvalidArgument { actual: "float", .. })
        ));
    }

    #[test]
    fn test_large_integer_saturates() {
        let args = FilterArgs::default().with_named("cidr", u64::MAX);
        assert_eq!(
            args.require_int(Filter::ReversePointerZone, "cidr"),
            Ok(i64::MAX)
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(&json!(null)), "null");
        assert_eq!(type_name(&json!(true)), "boolean");
        assert_eq!(type_name(&json!(1)), "integer");
        assert_eq!(type_name(&json!(1.5)), "float");
        assert_eq!(type_name(&json!("x")), "string");
        assert_eq!(type_name(&json!([1])), "array");
        assert_eq!(type_name(&json!({"a": 1})), "object");
    }

    #[test]
    fn test_bound_lists_declared_parameters_only() {
        let args = FilterArgs::positional([json!("::1")]).with_named("extra", "ignored");
        let bound = args.bound(Filter::ReversePointerZone);
        assert_eq!(bound.len(), 1);
        assert_eq!(bound.get("ip"), Some(&json!("::1")));
    }
}
