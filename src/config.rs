//! Plan configuration.
//!
//! Loaded from a JSON file when a path is given, otherwise from environment
//! variables (a `.env` file is honoured by `main`).

use crate::models::Network;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;

/// Environment variable holding the base network.
pub const ENV_BASE_CIDR: &str = "ZONE_PLAN_BASE_CIDR";
/// Environment variable holding the comma separated zone names.
pub const ENV_ZONES: &str = "ZONE_PLAN_ZONES";
/// Environment variable selecting the output format.
pub const ENV_OUTPUT: &str = "ZONE_PLAN_OUTPUT";

/// How the plan is printed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {other}").into()),
        }
    }
}

/// Inputs of a planning run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanConfig {
    /// Base network in `a.b.c.d/prefix` form.
    pub base_cidr: String,
    /// Zone names, in the order subnets are handed out.
    pub zones: Vec<String>,
    #[serde(default)]
    pub output: OutputFormat,
}

impl PlanConfig {
    /// Parse the base network and check the zone list.
    ///
    /// # Returns
    /// * `Ok(Network)` - The parsed base network
    /// * `Err` - If the base is invalid, no zones are given, or a zone repeats
    pub fn validate(&self) -> Result<Network, Box<dyn Error>> {
        let base = Network::new(&self.base_cidr)?;

        if self.zones.is_empty() {
            return Err("No zones configured".into());
        }
        let mut seen = HashSet::new();
        for zone in &self.zones {
            if zone.is_empty() {
                return Err("Empty zone name".into());
            }
            if !seen.insert(zone.as_str()) {
                return Err(format!("Duplicate zone: {zone}").into());
            }
        }
        Ok(base)
    }
}

/// Split a comma separated zone list, dropping blanks.
fn parse_zone_list(zones: &str) -> Vec<String> {
    zones
        .split(',')
        .map(|z| z.trim())
        .filter(|z| !z.is_empty())
        .map(|z| z.to_string())
        .collect()
}

/// Parse a JSON plan configuration.
pub fn parse_config(json: &str) -> Result<PlanConfig, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let config: PlanConfig = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing config: path={} error={}", e.path(), e))?;
    Ok(config)
}

/// Read a JSON plan configuration from `path`.
pub fn read_config_file(path: &str) -> Result<PlanConfig, Box<dyn Error>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading config file {path}: {e}"))?;
    log::info!("Using config file: {path}");
    parse_config(&json)
}

/// Build a configuration from a variable lookup.
///
/// `lookup` is `std::env::var` in production; tests pass a closure.
pub fn config_from_lookup<F>(lookup: F) -> Result<PlanConfig, Box<dyn Error>>
where
    F: Fn(&str) -> Option<String>,
{
    let base_cidr = lookup(ENV_BASE_CIDR).ok_or(format!("{ENV_BASE_CIDR} is not set"))?;
    let zones = lookup(ENV_ZONES).ok_or(format!("{ENV_ZONES} is not set"))?;
    let output = match lookup(ENV_OUTPUT) {
        Some(o) => o.parse()?,
        None => OutputFormat::default(),
    };

    Ok(PlanConfig {
        base_cidr,
        zones: parse_zone_list(&zones),
        output,
    })
}

/// Load the configuration from `path` if given, else from the environment.
pub fn load_config(path: Option<&str>) -> Result<PlanConfig, Box<dyn Error>> {
    match path {
        Some(path) => read_config_file(path),
        None => {
            log::info!("Using config from environment ({ENV_BASE_CIDR}, {ENV_ZONES})");
            config_from_lookup(|key| std::env::var(key).ok())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_parse_config() {
        let config = parse_config(
            r#"{"base_cidr": "10.0.0.0/16", "zones": ["a", "b"], "output": "json"}"#,
        )
        .unwrap();
        assert_eq!(config.base_cidr, "10.0.0.0/16");
        assert_eq!(config.zones, vec!["a", "b"]);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_parse_config_default_output() {
        let config = parse_config(r#"{"base_cidr": "10.0.0.0/16", "zones": ["a"]}"#).unwrap();
        assert_eq!(config.output, OutputFormat::Csv);
    }

    #[test]
    fn test_parse_config_error_names_path() {
        let err = parse_config(r#"{"base_cidr": "10.0.0.0/16", "zones": ["a", 7]}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("path=zones[1]"), "got: {err}");
    }

    #[test]
    fn test_config_from_env() {
        let config = config_from_lookup(lookup_from(&[
            (ENV_BASE_CIDR, "10.0.0.0/16"),
            (ENV_ZONES, " us-east-1a, us-east-1b ,,us-east-1c"),
        ]))
        .unwrap();
        assert_eq!(config.zones, vec!["us-east-1a", "us-east-1b", "us-east-1c"]);
        assert_eq!(config.output, OutputFormat::Csv);

        let config = config_from_lookup(lookup_from(&[
            (ENV_BASE_CIDR, "10.0.0.0/16"),
            (ENV_ZONES, "a"),
            (ENV_OUTPUT, "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_config_from_env_missing() {
        let err = config_from_lookup(lookup_from(&[(ENV_ZONES, "a")])).unwrap_err();
        assert_eq!(err.to_string(), "ZONE_PLAN_BASE_CIDR is not set");

        let err = config_from_lookup(lookup_from(&[
            (ENV_BASE_CIDR, "10.0.0.0/16"),
            (ENV_ZONES, "a"),
            (ENV_OUTPUT, "yaml"),
        ]))
        .unwrap_err();
        assert_eq!(err.to_string(), "Unknown output format: yaml");
    }

    #[test]
    fn test_validate() {
        let mut config = PlanConfig {
            base_cidr: "10.0.0.0/16".to_string(),
            zones: vec!["a".to_string(), "b".to_string()],
            output: OutputFormat::Csv,
        };
        assert_eq!(config.validate().unwrap().to_string(), "10.0.0.0/16");

        config.zones.push("a".to_string());
        assert_eq!(config.validate().unwrap_err().to_string(), "Duplicate zone: a");

        config.zones.clear();
        assert_eq!(config.validate().unwrap_err().to_string(), "No zones configured");

        config.base_cidr = "not-an-ip/16".to_string();
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "Invalid network: not-an-ip/16"
        );
    }
}
