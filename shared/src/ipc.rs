use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Control socket shared by daemon and CLI.
pub const CONTROL_SOCKET: &str = "/tmp/handvold.sock";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Command {
    Start,
    Stop,
    Status,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Response {
    Ok,
    Error(String),
    Status(StatusInfo),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusInfo {
    pub is_running: bool,
    pub is_active: bool,
    pub is_muted: bool,
    /// Last volume level sent to the audio sink, in the sink's own scale.
    pub volume_level: Option<f64>,
    /// Last UI bar height computed from the pinch distance.
    pub bar_level: Option<f64>,
}

#[derive(Error, Debug)]
pub enum IpcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Connection refused: is handvold running?")]
    ConnectionRefused,

    #[error("Connection timeout")]
    Timeout,
}
