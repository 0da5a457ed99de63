//! Bridge configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! Options can also be changed one at a time by name, the way the host
//! binary's `set_option` request does.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::rules::BASE_RULE_FILE;
use crate::solver::native::DEFAULT_NODE_LIMIT;

/// Engine stack limit in bytes, for engines that expose one.
pub const DEFAULT_STACK_LIMIT: u64 = 4_000_000_000;

/// Directory holding the base rule template and generated rule files.
pub const DEFAULT_RULES_DIR: &str = "rules";

/// Which solver answers queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Native,
    Scryer,
}

impl Backend {
    pub fn from_name(s: &str) -> Option<Backend> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Some(Backend::Native),
            "scryer" => Some(Backend::Scryer),
            _ => None,
        }
    }
}

/// Settings for building a bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub rules_dir: PathBuf,
    pub base_rule_file: String,
    pub stack_limit: u64,
    /// Positions one native search may visit; `None` is unbounded.
    pub node_limit: Option<u64>,
    pub backend: Backend,
    pub verbose: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        BridgeConfig {
            rules_dir: PathBuf::from(DEFAULT_RULES_DIR),
            base_rule_file: BASE_RULE_FILE.to_string(),
            stack_limit: DEFAULT_STACK_LIMIT,
            node_limit: Some(DEFAULT_NODE_LIMIT),
            backend: Backend::Native,
            verbose: false,
        }
    }
}

fn parse_u64(name: &str, value: Option<&str>) -> Result<u64, String> {
    let v = value.ok_or_else(|| format!("option {} needs a value", name))?;
    v.parse::<u64>()
        .map_err(|_| format!("invalid value for {}: '{}'", name, v))
}

fn parse_bool(name: &str, value: Option<&str>) -> Result<bool, String> {
    match value {
        None | Some("true") | Some("on") | Some("1") => Ok(true),
        Some("false") | Some("off") | Some("0") => Ok(false),
        Some(v) => Err(format!("invalid value for {}: '{}'", name, v)),
    }
}

impl BridgeConfig {
    /// Parses a JSON config. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Reads a JSON config file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
        BridgeConfig::from_json(&text)
            .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))
    }

    /// Sets one option by name. Names are case-insensitive.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), String> {
        match name.to_ascii_lowercase().as_str() {
            "rulesdir" => {
                let v = value.ok_or("option RulesDir needs a value")?;
                self.rules_dir = PathBuf::from(v);
            }
            "baserulefile" => {
                let v = value.ok_or("option BaseRuleFile needs a value")?;
                self.base_rule_file = v.to_string();
            }
            "stacklimit" => {
                self.stack_limit = parse_u64(name, value)?;
            }
            "nodelimit" => {
                self.node_limit = match value {
                    None | Some("none") => None,
                    v => Some(parse_u64(name, v)?),
                };
            }
            "backend" => {
                let v = value.ok_or("option Backend needs a value")?;
                self.backend =
                    Backend::from_name(v).ok_or_else(|| format!("unknown backend: '{}'", v))?;
            }
            "verbose" => {
                self.verbose = parse_bool(name, value)?;
            }
            _ => return Err(format!("unknown option: {}", name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = BridgeConfig::default();
        assert_eq!(c.rules_dir, PathBuf::from("rules"));
        assert_eq!(c.base_rule_file, "tic-tac-toe.pl");
        assert_eq!(c.stack_limit, 4_000_000_000);
        assert_eq!(c.backend, Backend::Native);
        assert!(!c.verbose);
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(BridgeConfig::from_json("{}").unwrap(), BridgeConfig::default());
    }

    #[test]
    fn json_overrides_fields() {
        let c = BridgeConfig::from_json(
            r#"{"backend":"scryer","rules_dir":"/tmp/rules","node_limit":null,"stack_limit":1000}"#,
        )
        .unwrap();
        assert_eq!(c.backend, Backend::Scryer);
        assert_eq!(c.rules_dir, PathBuf::from("/tmp/rules"));
        assert_eq!(c.node_limit, None);
        assert_eq!(c.stack_limit, 1000);
    }

    #[test]
    fn json_rejects_unknown_backend() {
        assert!(BridgeConfig::from_json(r#"{"backend":"gnu"}"#).is_err());
    }

    #[test]
    fn set_option_by_name() {
        let mut c = BridgeConfig::default();
        c.set_option("NodeLimit", Some("500")).unwrap();
        assert_eq!(c.node_limit, Some(500));
        c.set_option("nodelimit", Some("none")).unwrap();
        assert_eq!(c.node_limit, None);
        c.set_option("Backend", Some("SCRYER")).unwrap();
        assert_eq!(c.backend, Backend::Scryer);
        c.set_option("Verbose", None).unwrap();
        assert!(c.verbose);
        c.set_option("Verbose", Some("off")).unwrap();
        assert!(!c.verbose);
        c.set_option("RulesDir", Some("elsewhere")).unwrap();
        assert_eq!(c.rules_dir, PathBuf::from("elsewhere"));
    }

    #[test]
    fn set_option_errors() {
        let mut c = BridgeConfig::default();
        assert!(c.set_option("Threads", Some("4")).is_err());
        assert!(c.set_option("StackLimit", Some("lots")).is_err());
        assert!(c.set_option("StackLimit", None).is_err());
        assert!(c.set_option("Backend", Some("gnu")).is_err());
        assert_eq!(c, BridgeConfig::default());
    }
}
