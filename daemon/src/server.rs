use shared::ipc::{Command, Response};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixListener;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::capture::FrameSocket;
use crate::output::AudioSink;
use crate::state::DaemonState;

pub struct DaemonServer {
    socket_path: PathBuf,
    state: Arc<Mutex<DaemonState>>,
}

impl DaemonServer {
    pub fn new(socket_path: PathBuf, state: Arc<Mutex<DaemonState>>) -> Self {
        Self { socket_path, state }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let socket_path = self.socket_path.clone();

        if socket_path.exists() {
            std::fs::remove_file(&socket_path)?;
        }

        info!("Starting control server at {}", socket_path.display());

        let listener = UnixListener::bind(&socket_path)?;
        debug!("Listener bound successfully");

        loop {
            debug!("Waiting for connection...");
            let state = Arc::clone(&self.state);
            match listener.accept().await {
                Ok((stream, _addr)) => {
                    debug!("Connection accepted");
                    tokio::spawn(async move {
                        if let Err(e) = Self::handle_connection(state, stream).await {
                            error!("Error handling connection: {}", e);
                        } else {
                            debug!("Connection handled successfully");
                        }
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }

    async fn handle_connection(
        state: Arc<Mutex<DaemonState>>,
        mut stream: tokio::net::UnixStream,
    ) -> anyhow::Result<()> {
        let mut buffer = vec![0u8; 1024];
        let n = stream.read(&mut buffer).await?;

        if n == 0 {
            return Ok(());
        }

        buffer.truncate(n);

        let command: Command = serde_json::from_slice(&buffer)?;

        info!("Received command: {:?}", command);

        let response = match command {
            Command::Start => match Self::handle_start(&state).await {
                Ok(()) => Response::Ok,
                Err(e) => {
                    error!("Start failed: {}", e);
                    Response::Error(e.to_string())
                }
            },
            Command::Stop => {
                let mut state_guard = state.lock().await;
                state_guard.stop_gesture_processing().await;
                if let Some(socket) = state_guard.frame_socket.lock().await.as_mut() {
                    socket.stop();
                }
                *state_guard.frame_socket.lock().await = None;
                *state_guard.audio_sink.lock().await = None;
                state_guard.deactivate().await?;
                info!("Deactivated gesture control");
                Response::Ok
            }
            Command::Status => {
                let status = state.lock().await.get_status().await;
                Response::Status(status)
            }
        };

        let response_json = serde_json::to_vec(&response)?;
        stream.write_all(&response_json).await?;

        info!("Sent response: {:?}", response);

        Ok(())
    }

    async fn handle_start(state: &Arc<Mutex<DaemonState>>) -> anyhow::Result<()> {
        let mut state_guard = state.lock().await;

        if state_guard.frame_socket.lock().await.is_some() {
            return Err(anyhow::anyhow!("Frame ingest already running"));
        }

        state_guard.activate().await?;

        let sink = AudioSink::from_config(&state_guard.config.audio)?;
        *state_guard.audio_sink.lock().await = Some(Arc::new(sink));

        let mut frame_socket =
            FrameSocket::new(state_guard.config.capture.frame_socket.clone().into());
        let (frame_tx, frame_rx) =
            tokio::sync::broadcast::channel(state_guard.config.capture.broadcast_capacity);
        frame_socket.start(frame_tx)?;
        *state_guard.frame_socket.lock().await = Some(frame_socket);
        *state_guard.frame_rx.lock().await = Some(frame_rx);
        debug!("Frame ingest started, audio sink ready");

        if let Err(e) = state_guard.start_gesture_processing().await {
            error!("Failed to start gesture processing: {}", e);
            // Roll back so a retry starts clean.
            if let Some(socket) = state_guard.frame_socket.lock().await.as_mut() {
                socket.stop();
            }
            *state_guard.frame_socket.lock().await = None;
            *state_guard.audio_sink.lock().await = None;
            state_guard.deactivate().await?;
            return Err(e);
        }

        info!("Activated gesture control");
        Ok(())
    }
}

impl Drop for DaemonServer {
    fn drop(&mut self) {
        if self.socket_path.exists() {
            let _ = std::fs::remove_file(&self.socket_path);
        }
    }
}
