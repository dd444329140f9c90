//! surf-config
//!
//! Layered YAML configuration for the `surf` tools.
//!
//! Documents are merged in order (later wins, objects merge key by key),
//! converted to JSON and hashed over their canonical form so two runs can
//! prove they used the same effective settings. String leaves that look
//! like credentials abort the load: the camp config is meant to be
//! committed, so it must never carry a secret.

mod camp;
mod consumption;

pub use camp::{CampConfig, DEFAULT_CAMP_NAME, DEFAULT_DATE_FORMATS};
pub use consumption::{
    consumed_pointers_for_mode, report_unused_keys, ConfigMode, UnusedKeyPolicy, UnusedKeyReport,
};

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Comma-separated config paths used when the CLI gets no `--config`.
pub const ENV_CONFIG_PATHS: &str = "SURF_CONFIG";

/// Leaf values starting with any of these are treated as credentials.
const SECRET_PREFIXES: &[&str] = &[
    "sk-",
    "sk_live",
    "sk_test",
    "AKIA",
    "-----BEGIN",
    "ghp_",
    "gho_",
    "glpat-",
    "xoxb-",
    "xoxp-",
];

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// sha256 hex of `canonical_json`.
    pub config_hash: String,
    pub canonical_json: String,
    pub config_json: Value,
}

impl LoadedConfig {
    /// Configuration with no documents: every typed value takes its default.
    pub fn empty() -> Result<Self> {
        load_layered_yaml_from_strings(&[])
    }
}

pub fn load_layered_yaml<P: AsRef<Path>>(paths: &[P]) -> Result<LoadedConfig> {
    let docs = paths
        .iter()
        .map(|p| {
            let p = p.as_ref();
            fs::read_to_string(p).with_context(|| format!("read config yaml {}", p.display()))
        })
        .collect::<Result<Vec<String>>>()?;
    let refs: Vec<&str> = docs.iter().map(String::as_str).collect();
    load_layered_yaml_from_strings(&refs)
}

pub fn load_layered_yaml_from_strings(yaml_docs: &[&str]) -> Result<LoadedConfig> {
    let mut merged = Value::Object(Default::default());
    for (i, raw) in yaml_docs.iter().enumerate() {
        let doc: serde_yaml::Value =
            serde_yaml::from_str(raw).with_context(|| format!("invalid yaml (layer {i})"))?;
        // An empty document parses to null; it contributes nothing.
        if doc.is_null() {
            continue;
        }
        let doc = serde_json::to_value(doc).context("yaml -> json conversion failed")?;
        merged = deep_merge(merged, doc);
    }

    reject_secret_literals(&merged)?;

    let canonical_json = serde_json::to_string(&merged).context("canonical json encode failed")?;
    let config_hash = sha256_hex(canonical_json.as_bytes());
    Ok(LoadedConfig {
        config_hash,
        canonical_json,
        config_json: merged,
    })
}

fn deep_merge(base: Value, over: Value) -> Value {
    match (base, over) {
        (Value::Object(mut into), Value::Object(from)) => {
            for (k, v) in from {
                let prev = into.remove(&k).unwrap_or(Value::Null);
                into.insert(k, deep_merge(prev, v));
            }
            Value::Object(into)
        }
        (_, over) => over,
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

fn reject_secret_literals(v: &Value) -> Result<()> {
    for ptr in consumption::leaf_pointers(v) {
        let Some(s) = v.pointer(&ptr).and_then(Value::as_str) else {
            continue;
        };
        let t = s.trim();
        if t.len() >= 8 && SECRET_PREFIXES.iter().any(|p| t.starts_with(p)) {
            bail!("CONFIG_SECRET_DETECTED leaf={ptr} value=REDACTED");
        }
    }
    Ok(())
}
