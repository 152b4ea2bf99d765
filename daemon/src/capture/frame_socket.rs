use anyhow::Result;
use shared::landmark::HandFrame;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Frame ingest socket.
///
/// The external landmark detector connects here and streams one JSON
/// `HandFrame` per line. Frames fan out on a broadcast channel to the
/// gesture processing task. Malformed lines are dropped with a warning;
/// the stream keeps going.
pub struct FrameSocket {
    socket_path: PathBuf,
    accept_task: Option<JoinHandle<()>>,
}

impl FrameSocket {
    pub fn new(socket_path: PathBuf) -> Self {
        Self {
            socket_path,
            accept_task: None,
        }
    }

    pub fn start(&mut self, frame_tx: broadcast::Sender<HandFrame>) -> Result<()> {
        if self.socket_path.exists() {
            std::fs::remove_file(&self.socket_path)?;
        }

        let listener = UnixListener::bind(&self.socket_path)?;
        info!("Frame socket listening at {}", self.socket_path.display());

        let task = tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((stream, _addr)) => {
                        debug!("Detector connected");
                        let tx = frame_tx.clone();
                        tokio::spawn(async move {
                            if let Err(e) = Self::pump_frames(stream, tx).await {
                                error!("Frame stream error: {}", e);
                            } else {
                                info!("Detector disconnected");
                            }
                        });
                    }
                    Err(e) => {
                        error!("Error accepting detector connection: {}", e);
                    }
                }
            }
        });

        self.accept_task = Some(task);
        Ok(())
    }

    async fn pump_frames(stream: UnixStream, tx: broadcast::Sender<HandFrame>) -> Result<()> {
        let mut lines = BufReader::new(stream).lines();

        while let Some(line) = lines.next_line().await? {
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<HandFrame>(&line) {
                Ok(frame) => {
                    debug!("Received frame with {} landmarks", frame.points.len());
                    // Send fails only when no receiver is attached; frames
                    // with nobody listening are simply dropped.
                    let _ = tx.send(frame);
                }
                Err(e) => {
                    warn!("Dropping malformed frame line: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Stop accepting frames and remove the socket file. Safe to call
    /// more than once.
    pub fn stop(&mut self) {
        if let Some(task) = self.accept_task.take() {
            task.abort();
        }
        if self.socket_path.exists() {
            let _ = std::fs::remove_file(&self.socket_path);
        }
        info!("Frame socket stopped");
    }
}

impl Drop for FrameSocket {
    fn drop(&mut self) {
        self.stop();
    }
}
