use crate::capture::FrameSocket;
use crate::config::Config;
use crate::gesture::{GesturePipeline, RangeMap};
use crate::output::AudioSink;
use crate::rate_limit::VolumeRateLimiter;
use shared::ipc::StatusInfo;
use shared::landmark::HandFrame;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Last values the processing task pushed to the sink, for status
/// reporting. The bar level is presentational only; external UIs read
/// it from `Status` rather than the daemon drawing anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Telemetry {
    pub is_muted: bool,
    pub volume_level: Option<f64>,
    pub bar_level: Option<f64>,
}

pub struct DaemonState {
    pub config: Config,
    pub is_active: Arc<Mutex<bool>>,
    pub frame_socket: Arc<Mutex<Option<FrameSocket>>>,
    pub frame_rx: Arc<Mutex<Option<broadcast::Receiver<HandFrame>>>>,
    pub audio_sink: Arc<Mutex<Option<Arc<AudioSink>>>>,
    pub gesture_task_handle: Arc<Mutex<Option<JoinHandle<()>>>>,
    pub telemetry: Arc<Mutex<Telemetry>>,
}

impl DaemonState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            is_active: Arc::new(Mutex::new(false)),
            frame_socket: Arc::new(Mutex::new(None)),
            frame_rx: Arc::new(Mutex::new(None)),
            audio_sink: Arc::new(Mutex::new(None)),
            gesture_task_handle: Arc::new(Mutex::new(None)),
            telemetry: Arc::new(Mutex::new(Telemetry::default())),
        }
    }

    pub async fn activate(&mut self) -> anyhow::Result<()> {
        *self.is_active.lock().await = true;
        tracing::info!("Daemon activated");
        Ok(())
    }

    pub async fn deactivate(&mut self) -> anyhow::Result<()> {
        *self.is_active.lock().await = false;
        tracing::info!("Daemon deactivated");
        Ok(())
    }

    pub async fn get_status(&self) -> StatusInfo {
        let is_active = *self.is_active.lock().await;
        let telemetry = *self.telemetry.lock().await;
        StatusInfo {
            is_running: true,
            is_active,
            is_muted: telemetry.is_muted,
            volume_level: telemetry.volume_level,
            bar_level: telemetry.bar_level,
        }
    }

    /// Spawn the per-frame consumer: distance → volume mapping and fist
    /// classification → mute gate, with sink calls issued in frame
    /// order (frame N's commands complete before frame N+1 is read).
    pub async fn start_gesture_processing(&self) -> anyhow::Result<()> {
        let frame_rx_option: Option<broadcast::Receiver<HandFrame>> =
            self.frame_rx.lock().await.take();
        let mut frame_rx =
            frame_rx_option.ok_or_else(|| anyhow::anyhow!("Frame receiver not available"))?;

        let sink = self
            .audio_sink
            .lock()
            .await
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Audio sink not available"))?;

        // The sink reports the device's volume bounds; the mapper treats
        // them as opaque. Built here so a bad domain fails the Start
        // command instead of the processing task.
        let (min_vol, max_vol) = sink.volume_range();
        let mapping = &self.config.mapping;
        let volume_map = RangeMap::new(
            mapping.distance_min,
            mapping.distance_max,
            min_vol,
            max_vol,
        )?;
        let bar_map = RangeMap::new(
            mapping.distance_min,
            mapping.distance_max,
            mapping.bar_empty,
            mapping.bar_full,
        )?;
        let mut pipeline = GesturePipeline::new(volume_map, bar_map);

        let limiter = VolumeRateLimiter::new(
            self.config.rate_limit.volume_sets_per_second,
            self.config.rate_limit.burst_capacity,
            self.config.rate_limit.enabled,
        );

        let telemetry = self.telemetry.clone();

        let gesture_task = tokio::spawn(async move {
            tracing::info!("Gesture processing task started");

            loop {
                match frame_rx.recv().await {
                    Ok(frame) => {
                        let outcome = pipeline.process(&frame);

                        if let Some(volume) = outcome.volume {
                            if limiter.check() {
                                if let Err(e) = sink.set_volume(volume).await {
                                    tracing::error!("Failed to set volume: {}", e);
                                }
                            } else {
                                tracing::debug!("Volume set throttled this frame");
                            }
                        }

                        if let Some(muted) = outcome.mute {
                            if let Err(e) = sink.set_mute(muted).await {
                                tracing::error!("Failed to set mute: {}", e);
                            }
                        }

                        let mut t = telemetry.lock().await;
                        if outcome.volume.is_some() {
                            t.volume_level = outcome.volume;
                        }
                        if outcome.bar.is_some() {
                            t.bar_level = outcome.bar;
                        }
                        t.is_muted = pipeline.is_muted();
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!("Gesture processing lagged, dropped {} frames", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        tracing::info!("Frame channel closed, stopping gesture processing");
                        break;
                    }
                }
            }
        });

        *self.gesture_task_handle.lock().await = Some(gesture_task);
        Ok(())
    }

    pub async fn stop_gesture_processing(&self) {
        if let Some(handle) = self.gesture_task_handle.lock().await.take() {
            handle.abort();
            tracing::info!("Gesture processing task stopped");
        }
    }
}
