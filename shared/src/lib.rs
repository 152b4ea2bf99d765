pub mod ipc;
pub mod landmark;

pub use ipc::{Command, IpcError, Response, StatusInfo};
pub use landmark::{HandFrame, LandmarkPoint};
