use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::gesture::RangeMap;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default = "Config::default")]
pub struct Config {
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub mapping: MappingConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CaptureConfig {
    /// Unix socket the external landmark detector streams frames into.
    #[serde(default = "default_frame_socket")]
    pub frame_socket: String,
    #[serde(default = "default_broadcast_capacity")]
    pub broadcast_capacity: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            frame_socket: default_frame_socket(),
            broadcast_capacity: default_broadcast_capacity(),
        }
    }
}

fn default_frame_socket() -> String {
    "/tmp/handvold-frames.sock".to_string()
}
fn default_broadcast_capacity() -> usize {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MappingConfig {
    /// Pinch distance (pixels) that pins the volume at its minimum.
    #[serde(default = "default_distance_min")]
    pub distance_min: f64,
    /// Pinch distance (pixels) that pins the volume at its maximum.
    #[serde(default = "default_distance_max")]
    pub distance_max: f64,
    /// UI bar height at minimum distance. Larger than `bar_full` on
    /// purpose: the bar codomain is inverted.
    #[serde(default = "default_bar_empty")]
    pub bar_empty: f64,
    /// UI bar height at maximum distance.
    #[serde(default = "default_bar_full")]
    pub bar_full: f64,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            distance_min: default_distance_min(),
            distance_max: default_distance_max(),
            bar_empty: default_bar_empty(),
            bar_full: default_bar_full(),
        }
    }
}

fn default_distance_min() -> f64 {
    30.0
}
fn default_distance_max() -> f64 {
    250.0
}
fn default_bar_empty() -> f64 {
    400.0
}
fn default_bar_full() -> f64 {
    150.0
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AudioConfig {
    /// "pactl" drives the system audio endpoint; "null" only logs.
    #[serde(default = "default_backend")]
    pub backend: String,
    #[serde(default = "default_sink_name")]
    pub sink_name: String,
    /// Volume range the backend accepts. pactl works in percent.
    #[serde(default = "default_min_volume")]
    pub min_volume: f64,
    #[serde(default = "default_max_volume")]
    pub max_volume: f64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            sink_name: default_sink_name(),
            min_volume: default_min_volume(),
            max_volume: default_max_volume(),
        }
    }
}

fn default_backend() -> String {
    "pactl".to_string()
}
fn default_sink_name() -> String {
    "@DEFAULT_SINK@".to_string()
}
fn default_min_volume() -> f64 {
    0.0
}
fn default_max_volume() -> f64 {
    100.0
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RateLimitConfig {
    /// Sustained rate of volume-set calls to the audio backend. Mute
    /// commands are never throttled.
    #[serde(default = "default_volume_sets_per_second")]
    pub volume_sets_per_second: u32,
    #[serde(default = "default_burst_capacity")]
    pub burst_capacity: u32,
    #[serde(default = "default_rate_limit_enabled")]
    pub enabled: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            volume_sets_per_second: default_volume_sets_per_second(),
            burst_capacity: default_burst_capacity(),
            enabled: default_rate_limit_enabled(),
        }
    }
}

fn default_volume_sets_per_second() -> u32 {
    30
}
fn default_burst_capacity() -> u32 {
    60
}
fn default_rate_limit_enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capture: CaptureConfig::default(),
            mapping: MappingConfig::default(),
            audio: AudioConfig::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl Config {
    /// Reject configurations that would fail mid-frame instead of at
    /// startup: an empty/inverted distance domain, or a zero rate limit
    /// while throttling is enabled.
    pub fn validate(&self) -> Result<()> {
        RangeMap::new(
            self.mapping.distance_min,
            self.mapping.distance_max,
            self.mapping.bar_empty,
            self.mapping.bar_full,
        )?;

        if self.rate_limit.enabled
            && (self.rate_limit.volume_sets_per_second == 0 || self.rate_limit.burst_capacity == 0)
        {
            anyhow::bail!("rate_limit: volume_sets_per_second and burst_capacity must be non-zero");
        }

        if self.capture.broadcast_capacity == 0 {
            anyhow::bail!("capture: broadcast_capacity must be non-zero");
        }

        Ok(())
    }
}

pub fn load_config() -> Result<Config> {
    let config_path = get_config_path()?;

    let config = if config_path.exists() {
        tracing::info!("Loading config from {:?}", config_path);
        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        toml::from_str(&config_str)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?
    } else {
        tracing::info!("Config file not found at {:?}, using defaults", config_path);
        Config::default()
    };

    config.validate()?;
    tracing::info!("Config loaded successfully");
    Ok(config)
}

fn get_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("No config directory available"))?;
    Ok(dir.join("handvol").join("config.toml"))
}
