mod io;

use anyhow::{Context, Result};
use serde_json::Value;
use std::net::IpAddr;

use arpazone::filters::{Filter, FilterArgs};
use arpazone::network::types::AddressFamily;
use io::cli::{self, CommandArgs};
use io::json::{FilterOutput, Output};

fn main() {
    let args = cli::get_parsed_args();

    if let Err(error) = run(&args) {
        log_error!(format!("{error:#}"));
        std::process::exit(1);
    }
}

fn run(args: &CommandArgs) -> Result<()> {
    let (filter, filter_args) = args.command.invocation()?;

    if args.echo_arguments() {
        log_info!(format!(
            "{filter} {}",
            Value::Object(filter_args.bound(filter))
        ));
    }

    let result = filter
        .apply(&filter_args)
        .with_context(|| format!("{filter} filter failed"))?;

    if args.echo_arguments() && filter == Filter::ReversePointerZone {
        warn_unaligned_prefix(&filter_args);
    }

    if !args.quiet {
        println!("{result}");
    }

    if let Some(output_file) = &args.json {
        let written = FilterOutput::new(filter, filter_args.bound(filter), result)
            .write_to_file(output_file)?;
        if args.show_notes() {
            log_info!(format!("JSON output written to: {written}"));
        }
    }

    Ok(())
}

fn warn_unaligned_prefix(filter_args: &FilterArgs) {
    let filter = Filter::ReversePointerZone;
    if let (Ok(ip), Ok(cidr)) = (
        filter_args.require_str(filter, "ip"),
        filter_args.require_int(filter, "cidr"),
    ) && let Ok(address) = ip.parse::<IpAddr>()
    {
        let label_bits = AddressFamily::of(&address).label_bits();
        if cidr % i64::from(label_bits) != 0 {
            log_warn!(format!(
                "Prefix /{cidr} is not on a {label_bits}-bit label boundary, the zone covers the enclosing label"
            ));
        }
    }
}
