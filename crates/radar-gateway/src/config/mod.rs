//! Gateway config loader (strict parsing + environment overrides).
//!
//! Precedence: built-in defaults, then the YAML file named by
//! `RELEASE_RADAR_CONFIG` (if set), then `RELEASE_RADAR_*` variables.

pub mod schema;

use std::fs;

use radar_core::error::{RadarError, Result};

pub use schema::{AppSection, RadarConfig, ServerSection, StorageKind, StorageSection};

pub const ENV_PREFIX: &str = "RELEASE_RADAR_";
pub const CONFIG_PATH_ENV: &str = "RELEASE_RADAR_CONFIG";

pub fn load_from_file(path: &str) -> Result<RadarConfig> {
    let cfg = parse_file(path)?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<RadarConfig> {
    let cfg = parse_from_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Strict YAML parsing only. Range checks are left to `RadarConfig::validate`
/// so overrides can still correct a file before it is judged.
pub fn parse_from_str(s: &str) -> Result<RadarConfig> {
    serde_yaml::from_str(s).map_err(|e| RadarError::BadRequest(format!("invalid yaml: {e}")))
}

fn parse_file(path: &str) -> Result<RadarConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| RadarError::Internal(format!("read config failed: {e}")))?;
    parse_from_str(&s)
}

/// Load config for the running process.
pub fn load_from_env() -> Result<RadarConfig> {
    load_with(|key: &str| std::env::var(key).ok())
}

/// Merge defaults, the file named by `RELEASE_RADAR_CONFIG`, and overrides,
/// all read through `lookup`. Only the merged result is validated.
pub fn load_with<F>(lookup: F) -> Result<RadarConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = match lookup(CONFIG_PATH_ENV) {
        Some(path) => parse_file(&path)?,
        None => RadarConfig::default(),
    };
    apply_overrides(&mut cfg, &lookup)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Apply `RELEASE_RADAR_*` overrides read through `lookup`.
///
/// Does not validate; callers run `RadarConfig::validate` afterwards.
pub fn apply_overrides<F>(cfg: &mut RadarConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

    if let Some(v) = get("ERROR_RATE_THRESHOLD") {
        cfg.thresholds.error_rate_threshold = parse_env("ERROR_RATE_THRESHOLD", &v)?;
    }
    if let Some(v) = get("LATENCY_P95_THRESHOLD") {
        cfg.thresholds.latency_p95_threshold = parse_env("LATENCY_P95_THRESHOLD", &v)?;
    }
    if let Some(v) = get("THROUGHPUT_MIN") {
        cfg.thresholds.throughput_min = parse_env("THROUGHPUT_MIN", &v)?;
    }
    if let Some(v) = get("STORAGE_TYPE") {
        cfg.storage.kind = StorageKind::parse(&v)?;
    }
    if let Some(v) = get("LISTEN") {
        cfg.server.listen = v;
    }
    if let Some(v) = get("APP_NAME") {
        cfg.app.name = v;
    }
    Ok(())
}

fn parse_env<T>(name: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| RadarError::BadRequest(format!("{ENV_PREFIX}{name}={raw:?}: {e}")))
}
