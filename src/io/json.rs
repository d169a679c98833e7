use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::path::Path;

use arpazone::filters::Filter;

pub trait Output {
    fn write_to_file(&self, output_file: &str) -> Result<String>;
}

#[derive(Serialize, Debug, PartialEq)]
pub struct FilterOutput {
    pub filter: &'static str,
    pub arguments: Map<String, Value>,
    pub result: String,
}

impl FilterOutput {
    pub fn new(filter: Filter, arguments: Map<String, Value>, result: String) -> Self {
        Self {
            filter: filter.name(),
            arguments,
            result,
        }
    }
}

impl Output for FilterOutput {
    fn write_to_file(&self, output_file: &str) -> Result<String> {
        write_json(&self, output_file)
    }
}

/// Appends a `.json` extension unless one is already present
pub fn output_path(output_file: &str) -> String {
    if Path::new(output_file)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        output_file.to_string()
    } else {
        format!("{output_file}.json")
    }
}

fn write_json<T: Serialize>(data: &T, output_file: &str) -> Result<String> {
    let output_file = output_path(output_file);

    let file = File::create(&output_file)
        .with_context(|| format!("Failed to create output file: {output_file}"))?;
    serde_json::to_writer_pretty(file, data)?;

    Ok(output_file)
}
