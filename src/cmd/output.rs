use std::str::FromStr;
use anyhow::{anyhow, Error, Result};
use serde_json::Value;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Format {
    Json,
    Yaml,
}

pub fn render(value: &Value, format: Format) -> Result<String> {
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Yaml => serde_yaml::to_string(value)?,
    })
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(Format::Json),
            "yaml" => Ok(Format::Yaml),
            format => Err(anyhow!("unsupported format: {}", format)),
        }
    }
}
