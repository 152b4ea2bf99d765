pub mod capture;
pub mod config;
pub mod gesture;
pub mod output;
pub mod rate_limit;
pub mod server;
pub mod state;

pub use capture::FrameSocket;
pub use gesture::{FistClassifier, GesturePipeline, MuteGate, RangeMap};
pub use output::AudioSink;
pub use rate_limit::VolumeRateLimiter;
