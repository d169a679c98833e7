use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};

use arpazone::filters::{Filter, FilterArgs};

/// Command-line arguments for the program
#[derive(Parser, Debug)]
#[command(
    name = "arpazone",
    author = "Alex Ogden",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reverse DNS pointer and zone names for configuration templates",
)]
pub struct CommandArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Path of output file to write the JSON result to. Extension is optional.
    #[arg(long, global = true, required = false, env = "ARPAZONE_JSON_OUTPUT")]
    pub json: Option<String>,

    /// Don't print the result to the console, only write to the output file
    #[arg(short = 'Q', long, global = true, env = "ARPAZONE_QUIET")]
    pub quiet: bool,

    /// Print the filter arguments and prefix alignment warnings
    #[arg(short, long, global = true, default_value_t = false, env = "ARPAZONE_VERBOSE")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append END_STRING unless INPUT_STRING already ends with it
    Ending {
        input_string: String,
        end_string: String,
    },

    /// Full in-addr.arpa or ip6.arpa name of an address
    #[command(visible_alias = "ptr")]
    ReversePointer { ip: String },

    /// Reverse zone enclosing an address at the given prefix length
    #[command(visible_alias = "zone")]
    ReversePointerZone {
        ip: String,

        /// Prefix length in bits
        #[arg(allow_negative_numbers = true)]
        cidr: i64,
    },

    /// Invoke a filter with loosely typed JSON arguments, as a template engine would
    Call {
        filter: Filter,

        /// Positional arguments as a JSON array, e.g. '["fd42::", 64]'
        #[arg(long, default_value = "[]")]
        args: String,

        /// Named arguments as a JSON object, e.g. '{"cidr": 64}'
        #[arg(long, default_value = "{}")]
        kwargs: String,
    },
}

impl Command {
    /// The filter to run and its arguments
    pub fn invocation(&self) -> Result<(Filter, FilterArgs)> {
        let invocation = match self {
            Self::Ending {
                input_string,
                end_string,
            } => (
                Filter::Ending,
                FilterArgs::positional([
                    Value::from(input_string.as_str()),
                    Value::from(end_string.as_str()),
                ]),
            ),
            Self::ReversePointer { ip } => (
                Filter::ReversePointer,
                FilterArgs::positional([Value::from(ip.as_str())]),
            ),
            Self::ReversePointerZone { ip, cidr } => (
                Filter::ReversePointerZone,
                FilterArgs::positional([Value::from(ip.as_str()), Value::from(*cidr)]),
            ),
            Self::Call {
                filter,
                args,
                kwargs,
            } => (*filter, parse_call_args(args, kwargs)?),
        };
        Ok(invocation)
    }
}

fn parse_call_args(args: &str, kwargs: &str) -> Result<FilterArgs> {
    let positional: Vec<Value> = serde_json::from_str(args)
        .with_context(|| format!("--args must be a JSON array: {args}"))?;
    let named: Map<String, Value> = serde_json::from_str(kwargs)
        .with_context(|| format!("--kwargs must be a JSON object: {kwargs}"))?;
    Ok(FilterArgs::new(positional, named))
}

impl CommandArgs {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.quiet || self.json.is_some(),
            "The argument '--quiet' requires '--json <OUTPUT_FILE>'"
        );
        Ok(())
    }

    /// Status notes such as the JSON output path
    pub const fn show_notes(&self) -> bool {
        !self.quiet
    }

    /// Echo the filter arguments before running it
    pub const fn echo_arguments(&self) -> bool {
        self.verbose && !self.quiet
    }
}

/// Retrieves and validates the parsed command-line arguments
pub fn get_parsed_args() -> CommandArgs {
    let args = CommandArgs::parse();
    if let Err(e) = args.validate() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    args
}
