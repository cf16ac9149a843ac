use std::fs;
use std::path::Path;

use anyhow::Context;
use corona_core::stops;
use serde::{Deserialize, Serialize};

/// Demo configuration, stored as JSON. Load-only; runtime state is never
/// written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Milliseconds between randomized updates
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    pub gauges: Vec<GaugeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeConfig {
    pub label: String,
    /// Ordered gradient stops, low end of the range first
    pub stops: Vec<[u8; 3]>,
    #[serde(default = "default_range")]
    pub range: (f64, f64),
    #[serde(default)]
    pub initial: f64,
}

fn default_tick_ms() -> u64 {
    1000
}

fn default_range() -> (f64, f64) {
    (0.0, 100.0)
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            gauges: vec![
                GaugeConfig {
                    label: "Charge".to_string(),
                    stops: stops::CHARGE.to_vec(),
                    range: default_range(),
                    initial: 100.0,
                },
                GaugeConfig {
                    label: "Health".to_string(),
                    stops: stops::HEALTH.to_vec(),
                    range: default_range(),
                    initial: 100.0,
                },
            ],
        }
    }
}

/// Loads gauge configuration from `path`, or the built-in gauges when no path
/// is given.
pub fn load(path: Option<&Path>) -> Result<ConsoleConfig, anyhow::Error> {
    let Some(path) = path else {
        log::debug!("no config path given, using built-in gauges");
        return Ok(ConsoleConfig::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: ConsoleConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    if config.gauges.is_empty() {
        anyhow::bail!("config file {} defines no gauges", path.display());
    }
    log::info!(
        "loaded {} gauge(s) from {}",
        config.gauges.len(),
        path.display()
    );
    Ok(config)
}
