//! Command handlers for the `surf` binary.
//!
//! Shared context (config, ledger paths) and output helpers live here;
//! each command family has its own module.

mod import;
mod plan;
mod roster;

pub use import::import;
pub use plan::{plan, week};
pub use roster::{lessons, roster};

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use surf_config::{
    load_layered_yaml, report_unused_keys, CampConfig, ConfigMode, LoadedConfig, UnusedKeyPolicy,
    UnusedKeyReport, ENV_CONFIG_PATHS,
};
use surf_ledger::{load_guest_ledger, save_guest_ledger, GuestStore, ENV_LEDGER_PATH};
use surf_presence::{parse_period, OverlapRule};
use surf_schemas::Guest;
use tracing::{info, warn};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Shared context
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RuleArg {
    Inclusive,
    Strict,
}

impl From<RuleArg> for OverlapRule {
    fn from(r: RuleArg) -> Self {
        match r {
            RuleArg::Inclusive => OverlapRule::Inclusive,
            RuleArg::Strict => OverlapRule::StrictContainment,
        }
    }
}

/// Effective configuration for one command run.
pub struct CliContext {
    pub loaded: LoadedConfig,
    pub camp: CampConfig,
    pub unused: UnusedKeyReport,
    pub ledger_path: PathBuf,
}

impl CliContext {
    pub fn load(config_paths: &[String], mode: ConfigMode, strict: bool) -> Result<Self> {
        let mut paths: Vec<String> = config_paths.to_vec();
        if paths.is_empty() {
            if let Ok(v) = std::env::var(ENV_CONFIG_PATHS) {
                paths = v
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
            }
        }

        let loaded = if paths.is_empty() {
            LoadedConfig::empty()?
        } else {
            load_layered_yaml(&paths)?
        };
        let policy = if strict {
            UnusedKeyPolicy::Fail
        } else {
            UnusedKeyPolicy::Warn
        };
        let unused = report_unused_keys(mode, &loaded.config_json, policy)?;
        let camp = CampConfig::from_json(&loaded.config_json)?;

        let ledger_path = match std::env::var(ENV_LEDGER_PATH) {
            Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
            _ => camp.ledger_path.clone(),
        };

        Ok(Self {
            loaded,
            camp,
            unused,
            ledger_path,
        })
    }

    pub fn log_unused_keys(&self) {
        if !self.unused.is_clean() {
            warn!(
                mode = %self.unused.mode,
                keys = ?self.unused.unused_leaf_pointers,
                "config keys not read by this command"
            );
        }
        info!(camp = %self.camp.name, config_hash = %self.loaded.config_hash, "config loaded");
    }

    /// Date argument, or today at the camp when absent.
    pub fn date_or_today(&self, raw: Option<&str>) -> Result<NaiveDate> {
        match raw {
            Some(s) => parse_date(s),
            None => Ok(self.camp.today()),
        }
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let (d, _) = parse_period(raw, raw)?;
    Ok(d)
}

pub fn guest_line(g: &Guest) -> String {
    format!(
        "guest id={} name=\"{}\" booking={} band={} level={} arrival={} departure={} status={} lessons={} single_parent={}",
        g.id.map(|id| id.to_string()).unwrap_or_default(),
        g.full_name(),
        g.booking_number,
        g.age_band,
        g.skill_level,
        g.arrival,
        g.departure,
        g.booking_status,
        g.lesson_count,
        g.single_parent
    )
}

// ---------------------------------------------------------------------------
// Small commands
// ---------------------------------------------------------------------------

pub fn config_hash(paths: &[String]) -> Result<()> {
    let loaded = load_layered_yaml(paths)?;
    println!("config_hash={}", loaded.config_hash);
    println!("{}", loaded.canonical_json);
    Ok(())
}

pub fn delete(ctx: &CliContext, raw_id: &str) -> Result<()> {
    let id = Uuid::parse_str(raw_id.trim()).with_context(|| format!("invalid --id '{raw_id}'"))?;
    let mut store = load_guest_ledger(&ctx.ledger_path)?;

    // Surface the lookup failure with the ledger's own error.
    store.get(id)?;
    store.delete(id)?;
    save_guest_ledger(&ctx.ledger_path, &store)?;

    info!(%id, "guest deleted");
    println!("deleted id={id}");
    Ok(())
}
