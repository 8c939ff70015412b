use serde::Deserialize;
use radar_core::error::{RadarError, Result};
use radar_core::Thresholds;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadarConfig {
    #[serde(default)]
    pub app: AppSection,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub storage: StorageSection,

    #[serde(default)]
    pub thresholds: Thresholds,
}

impl RadarConfig {
    pub fn validate(&self) -> Result<()> {
        if self.app.name.trim().is_empty() {
            return Err(RadarError::BadRequest("app.name must not be empty".into()));
        }
        self.server.validate()?;
        self.storage.validate()?;
        validate_thresholds(&self.thresholds)?;
        Ok(())
    }
}

fn validate_thresholds(t: &Thresholds) -> Result<()> {
    if !t.error_rate_threshold.is_finite()
        || t.error_rate_threshold <= 0.0
        || t.error_rate_threshold > 1.0
    {
        return Err(RadarError::BadRequest(
            "thresholds.error_rate_threshold must be in (0, 1]".into(),
        ));
    }
    if !t.latency_p95_threshold.is_finite() || t.latency_p95_threshold <= 0.0 {
        return Err(RadarError::BadRequest(
            "thresholds.latency_p95_threshold must be a positive number".into(),
        ));
    }
    if t.throughput_min == 0 {
        return Err(RadarError::BadRequest(
            "thresholds.throughput_min must be greater than 0".into(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppSection {
    #[serde(default = "default_app_name")]
    pub name: String,

    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen
            .parse::<std::net::SocketAddr>()
            .map_err(|e| RadarError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}")))?;
        Ok(())
    }
}

/// Backing store for releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Memory,
    /// Reserved name for a persistent backend; rejected at validation.
    Sqlite,
}

impl StorageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKind::Memory => "memory",
            StorageKind::Sqlite => "sqlite",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageKind::Memory),
            "sqlite" => Ok(StorageKind::Sqlite),
            other => Err(RadarError::BadRequest(format!("unknown storage type: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct StorageSection {
    #[serde(default, rename = "type")]
    pub kind: StorageKind,
}

impl StorageSection {
    pub fn validate(&self) -> Result<()> {
        match self.kind {
            StorageKind::Memory => Ok(()),
            other => Err(RadarError::BadRequest(format!(
                "storage.type {} is not supported yet (only memory)",
                other.as_str()
            ))),
        }
    }
}

fn default_app_name() -> String {
    "Release Radar API".into()
}
fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").into()
}
fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
