//! Which config keys each command actually reads.
//!
//! A leaf counts as consumed when it sits under one of the mode's JSON
//! pointer prefixes. Leaves outside every prefix are reported so typos
//! (`storage/ledger_pth`) do not silently fall back to defaults.

use std::collections::BTreeSet;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigMode {
    /// `surf import`
    Import,
    /// `surf roster`, `surf lessons`, `surf delete`
    Roster,
    /// `surf plan`, `surf week`
    Plan,
}

impl ConfigMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigMode::Import => "IMPORT",
            ConfigMode::Roster => "ROSTER",
            ConfigMode::Plan => "PLAN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnusedKeyPolicy {
    Warn,
    Fail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnusedKeyReport {
    pub mode: String,
    /// Sorted, unique.
    pub consumed_prefixes: Vec<String>,
    /// Sorted.
    pub unused_leaf_pointers: Vec<String>,
}

impl UnusedKeyReport {
    pub fn is_clean(&self) -> bool {
        self.unused_leaf_pointers.is_empty()
    }
}

/// Consumed pointer prefixes per mode. Keep in step with `CampConfig`
/// reads in the CLI.
pub fn consumed_pointers_for_mode(mode: ConfigMode) -> &'static [&'static str] {
    // Storage and tide paths are known to every command.
    match mode {
        ConfigMode::Import => &[
            "/camp",
            "/storage/ledger_path",
            "/storage/plans_path",
            "/tides/path",
            "/import/date_formats",
            "/logging/filter",
        ],
        ConfigMode::Roster | ConfigMode::Plan => &[
            "/camp",
            "/storage/ledger_path",
            "/storage/plans_path",
            "/tides/path",
            "/logging/filter",
        ],
    }
}

/// Unused-leaf report for `mode`. With `Fail`, a non-clean report is an
/// error; with `Warn` it is returned for the caller to log.
pub fn report_unused_keys(
    mode: ConfigMode,
    config_json: &Value,
    policy: UnusedKeyPolicy,
) -> Result<UnusedKeyReport> {
    let consumed: BTreeSet<String> = consumed_pointers_for_mode(mode)
        .iter()
        .map(|p| normalize_pointer(p))
        .collect();
    let consumed_prefixes: Vec<String> = consumed.into_iter().collect();

    let mut unused: Vec<String> = leaf_pointers(config_json)
        .into_iter()
        .filter(|leaf| !consumed_prefixes.iter().any(|p| covers(p, leaf)))
        .collect();
    unused.sort();
    unused.dedup();

    let report = UnusedKeyReport {
        mode: mode.as_str().to_string(),
        consumed_prefixes,
        unused_leaf_pointers: unused,
    };

    if policy == UnusedKeyPolicy::Fail && !report.is_clean() {
        let preview: Vec<&String> = report.unused_leaf_pointers.iter().take(12).collect();
        bail!(
            "CONFIG_UNUSED_KEYS (mode={}): {} unused leaf key(s): {:?}",
            report.mode,
            report.unused_leaf_pointers.len(),
            preview
        );
    }
    Ok(report)
}

fn normalize_pointer(p: &str) -> String {
    let t = p.trim().trim_end_matches('/');
    if t.is_empty() {
        "/".to_string()
    } else if t.starts_with('/') {
        t.to_string()
    } else {
        format!("/{t}")
    }
}

/// `/a/b` covers `/a/b` and `/a/b/c`, not `/a/bc`. `/` covers everything.
fn covers(prefix: &str, leaf: &str) -> bool {
    if prefix == "/" || leaf == prefix {
        return true;
    }
    leaf.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// JSON pointers of every scalar leaf (arrays index by position).
pub(crate) fn leaf_pointers(v: &Value) -> Vec<String> {
    let mut out = Vec::new();
    walk(v, String::new(), &mut out);
    out
}

fn walk(v: &Value, at: String, out: &mut Vec<String>) {
    match v {
        Value::Object(map) => {
            for (k, child) in map {
                let token = k.replace('~', "~0").replace('/', "~1");
                walk(child, format!("{at}/{token}"), out);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                walk(child, format!("{at}/{i}"), out);
            }
        }
        _ => out.push(if at.is_empty() { "/".to_string() } else { at }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_respects_segment_boundaries() {
        assert!(covers("/storage", "/storage/ledger_path"));
        assert!(covers("/storage/ledger_path", "/storage/ledger_path"));
        assert!(!covers("/storage/ledger_path", "/storage/ledger_pathx"));
        assert!(covers("/", "/anything/at/all"));
    }

    #[test]
    fn pointers_are_normalized() {
        assert_eq!(normalize_pointer("camp/"), "/camp");
        assert_eq!(normalize_pointer("  "), "/");
    }
}
