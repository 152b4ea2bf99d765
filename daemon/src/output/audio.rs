use anyhow::Result;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::AudioConfig;

/// Boundary to the OS audio endpoint.
///
/// The endpoint's volume scale is opaque: `volume_range` reports
/// whatever bounds the backend works in, and callers map into that
/// range without interpreting it. pactl works in percent, so the
/// default range is 0..100.
pub enum AudioSink {
    Pactl(PactlSink),
    Null(NullSink),
}

impl AudioSink {
    pub fn from_config(config: &AudioConfig) -> Result<Self> {
        match config.backend.as_str() {
            "pactl" => Ok(Self::Pactl(PactlSink::new(
                config.sink_name.clone(),
                config.min_volume,
                config.max_volume,
            ))),
            "null" => Ok(Self::Null(NullSink::new(
                config.min_volume,
                config.max_volume,
            ))),
            other => Err(anyhow::anyhow!("Unknown audio backend: {}", other)),
        }
    }

    pub fn volume_range(&self) -> (f64, f64) {
        match self {
            Self::Pactl(sink) => sink.volume_range(),
            Self::Null(sink) => sink.volume_range(),
        }
    }

    pub async fn set_volume(&self, level: f64) -> Result<()> {
        match self {
            Self::Pactl(sink) => sink.set_volume(level).await,
            Self::Null(sink) => sink.set_volume(level),
        }
    }

    pub async fn set_mute(&self, muted: bool) -> Result<()> {
        match self {
            Self::Pactl(sink) => sink.set_mute(muted).await,
            Self::Null(sink) => sink.set_mute(muted),
        }
    }
}

/// Drives the system endpoint through the `pactl` command line tool.
pub struct PactlSink {
    sink_name: String,
    min_volume: f64,
    max_volume: f64,
}

impl PactlSink {
    pub fn new(sink_name: String, min_volume: f64, max_volume: f64) -> Self {
        info!("Audio sink: pactl, target {}", sink_name);
        Self {
            sink_name,
            min_volume,
            max_volume,
        }
    }

    pub fn volume_range(&self) -> (f64, f64) {
        (self.min_volume, self.max_volume)
    }

    pub async fn set_volume(&self, level: f64) -> Result<()> {
        let percent = format!("{}%", level.round() as i64);
        debug!("pactl set-sink-volume {} {}", self.sink_name, percent);
        self.run(&["set-sink-volume", &self.sink_name, &percent])
            .await
    }

    pub async fn set_mute(&self, muted: bool) -> Result<()> {
        let flag = if muted { "1" } else { "0" };
        info!("pactl set-sink-mute {} {}", self.sink_name, flag);
        self.run(&["set-sink-mute", &self.sink_name, flag]).await
    }

    async fn run(&self, args: &[&str]) -> Result<()> {
        let output = Command::new("pactl").args(args).output().await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow::anyhow!(
                "pactl {:?} failed: {}",
                args,
                stderr.trim()
            ));
        }
        Ok(())
    }
}

/// Log-only sink for tests and detector bring-up without touching the
/// real audio endpoint.
pub struct NullSink {
    min_volume: f64,
    max_volume: f64,
}

impl NullSink {
    pub fn new(min_volume: f64, max_volume: f64) -> Self {
        info!("Audio sink: null (logging only)");
        Self {
            min_volume,
            max_volume,
        }
    }

    pub fn volume_range(&self) -> (f64, f64) {
        (self.min_volume, self.max_volume)
    }

    pub fn set_volume(&self, level: f64) -> Result<()> {
        debug!("null sink: set_volume({:.2})", level);
        Ok(())
    }

    pub fn set_mute(&self, muted: bool) -> Result<()> {
        info!("null sink: set_mute({})", muted);
        Ok(())
    }
}
