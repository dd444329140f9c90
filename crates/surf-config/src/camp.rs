use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use serde_json::Value;

pub const DEFAULT_CAMP_NAME: &str = "Surf Camp";
pub const DEFAULT_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];

/// Typed view of the merged configuration. Missing keys take defaults;
/// present keys of the wrong type are errors.
#[derive(Debug, Clone, PartialEq)]
pub struct CampConfig {
    pub name: String,
    pub timezone: Tz,
    pub ledger_path: PathBuf,
    pub plans_path: PathBuf,
    pub tides_path: PathBuf,
    pub date_formats: Vec<String>,
    pub log_filter: String,
}

impl Default for CampConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_CAMP_NAME.to_string(),
            timezone: Tz::UTC,
            ledger_path: PathBuf::from("ledger.json"),
            plans_path: PathBuf::from("plans.json"),
            tides_path: PathBuf::from("tides.csv"),
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
            log_filter: "info".to_string(),
        }
    }
}

fn string_at(v: &Value, ptr: &str) -> Result<Option<String>> {
    match v.pointer(ptr) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => bail!("CONFIG_TYPE_ERROR {ptr}: expected string, got {other}"),
    }
}

impl CampConfig {
    pub fn from_json(v: &Value) -> Result<Self> {
        let mut cfg = CampConfig::default();

        if let Some(s) = string_at(v, "/camp/name")? {
            cfg.name = s;
        }
        if let Some(s) = string_at(v, "/camp/timezone")? {
            cfg.timezone = Tz::from_str(s.trim())
                .map_err(|_| anyhow!("CONFIG_INVALID_TIMEZONE /camp/timezone: '{s}'"))?;
        }
        if let Some(s) = string_at(v, "/storage/ledger_path")? {
            cfg.ledger_path = PathBuf::from(s);
        }
        if let Some(s) = string_at(v, "/storage/plans_path")? {
            cfg.plans_path = PathBuf::from(s);
        }
        if let Some(s) = string_at(v, "/tides/path")? {
            cfg.tides_path = PathBuf::from(s);
        }
        if let Some(s) = string_at(v, "/logging/filter")? {
            cfg.log_filter = s;
        }

        match v.pointer("/import/date_formats") {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                let formats = items
                    .iter()
                    .map(|f| {
                        f.as_str().map(str::to_string).ok_or_else(|| {
                            anyhow!("CONFIG_TYPE_ERROR /import/date_formats: expected strings")
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                if formats.is_empty() {
                    bail!("CONFIG_INVALID /import/date_formats: must not be empty");
                }
                cfg.date_formats = formats;
            }
            Some(other) => {
                bail!("CONFIG_TYPE_ERROR /import/date_formats: expected list, got {other}")
            }
        }

        Ok(cfg)
    }

    /// Today's date at the camp.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}
