use governor::{clock, state::InMemoryState, state::NotKeyed, Quota, RateLimiter};
use std::num::NonZeroU32;

/// Throttle for volume-set calls to the audio backend.
///
/// Volume updates arrive once per camera frame, and each one costs an
/// external process call; the token bucket caps that rate. Mute
/// commands bypass this limiter entirely: the edge-triggered contract
/// requires every transition to reach the sink exactly once.
pub struct VolumeRateLimiter {
    limiter: RateLimiter<NotKeyed, InMemoryState, clock::DefaultClock>,
    enabled: bool,
}

impl VolumeRateLimiter {
    /// `volume_sets_per_second` and `burst_capacity` must be non-zero
    /// when `enabled`; config validation enforces this before we get
    /// here.
    pub fn new(volume_sets_per_second: u32, burst_capacity: u32, enabled: bool) -> Self {
        // governor rejects zero quotas, so a disabled limiter still
        // needs a non-zero placeholder.
        let per_second = NonZeroU32::new(volume_sets_per_second.max(1))
            .expect("max(1) guarantees non-zero");
        let burst = NonZeroU32::new(burst_capacity.max(1)).expect("max(1) guarantees non-zero");
        let quota = Quota::per_second(per_second).allow_burst(burst);

        Self {
            limiter: RateLimiter::direct(quota),
            enabled,
        }
    }

    /// Non-blocking check: true when this volume set may proceed,
    /// false when it should be skipped for this frame.
    pub fn check(&self) -> bool {
        if !self.enabled {
            return true;
        }

        self.limiter.check().is_ok()
    }
}
