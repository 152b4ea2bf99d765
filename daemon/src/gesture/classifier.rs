use shared::landmark::{HandFrame, FINGER_BASES, FINGER_TIPS};
use tracing::debug;

/// Closed-fist classifier over the four non-thumb fingers.
///
/// A finger counts as closed when its tip is not above its base joint
/// (`tip.y >= base.y`; y grows downward in image space). The hand is a
/// fist when all four fingers are closed. The thumb is excluded, which
/// means an extended thumb with four curled fingers still classifies as
/// a fist; that matches the reference behavior and is a known accuracy
/// limitation, not something to quietly change here.
#[derive(Debug, Default, Clone, Copy)]
pub struct FistClassifier;

impl FistClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Returns `None` when any required tip or base landmark is missing
    /// from the frame; that frame is skipped, not an error.
    pub fn classify(&self, frame: &HandFrame) -> Option<bool> {
        if !frame.has_all(&FINGER_TIPS) || !frame.has_all(&FINGER_BASES) {
            debug!("Frame missing tip/base landmarks, skipping fist check");
            return None;
        }

        // All four closed; any open finger settles it. The checks are
        // independent, so evaluation order does not affect the result.
        for (&tip_id, &base_id) in FINGER_TIPS.iter().zip(FINGER_BASES.iter()) {
            let tip = frame.point(tip_id)?;
            let base = frame.point(base_id)?;
            if tip.y < base.y {
                debug!("Finger open (tip {} above base {}), not a fist", tip_id, base_id);
                return Some(false);
            }
        }

        debug!("All four fingers closed, fist detected");
        Some(true)
    }
}
