pub mod audio;

pub use audio::{AudioSink, NullSink, PactlSink};
