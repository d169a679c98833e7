use super::{Filter, args::FilterArgs, error::FilterError};

/// Appends `end_string` unless `input_string` already ends with it
pub fn ending(input_string: &str, end_string: &str) -> String {
    if input_string.ends_with(end_string) {
        input_string.to_string()
    } else {
        format!("{input_string}{end_string}")
    }
}

pub fn ending_value(args: &FilterArgs) -> Result<String, FilterError> {
    let input_string = args.require_str(Filter::Ending, "input_string")?;
    let end_string = args.require_str(Filter::Ending, "end_string")?;
    Ok(ending(input_string, end_string))
}
