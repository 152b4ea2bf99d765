pub mod classifier;
pub mod geometry;
pub mod mute;
pub mod pipeline;
pub mod range;

pub use classifier::FistClassifier;
pub use mute::{MuteGate, MuteState};
pub use pipeline::{FrameOutcome, GesturePipeline};
pub use range::{InvalidDomain, RangeMap};
