use shared::landmark::{HandFrame, INDEX_TIP, THUMB_TIP};
use tracing::debug;

use super::classifier::FistClassifier;
use super::geometry::landmark_distance;
use super::mute::MuteGate;
use super::range::RangeMap;

/// What one frame produced. Any field can be `None`: the volume path
/// needs the thumb and index tips, the mute path needs the full
/// tip/base set, and the gate only emits on a state change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    pub volume: Option<f64>,
    pub bar: Option<f64>,
    pub mute: Option<bool>,
}

/// Per-frame gesture driver.
///
/// Runs the two independent paths over each landmark frame: pinch
/// distance → volume/bar mapping, and fist classification → mute gate.
/// Only the gate carries state between frames.
pub struct GesturePipeline {
    volume_map: RangeMap,
    bar_map: RangeMap,
    classifier: FistClassifier,
    gate: MuteGate,
}

impl GesturePipeline {
    pub fn new(volume_map: RangeMap, bar_map: RangeMap) -> Self {
        Self {
            volume_map,
            bar_map,
            classifier: FistClassifier::new(),
            gate: MuteGate::new(),
        }
    }

    pub fn process(&mut self, frame: &HandFrame) -> FrameOutcome {
        let (volume, bar) = match frame.point(THUMB_TIP).zip(frame.point(INDEX_TIP)) {
            Some((thumb, index)) => {
                let distance = landmark_distance(thumb, index);
                let volume = self.volume_map.map(distance);
                let bar = self.bar_map.map(distance);
                debug!(distance, volume, bar, "Pinch distance mapped");
                (Some(volume), Some(bar))
            }
            None => {
                debug!("Frame missing pinch landmarks, skipping volume path");
                (None, None)
            }
        };

        // A frame without the full tip/base set leaves the gate untouched.
        let mute = match self.classifier.classify(frame) {
            Some(is_fist) => self.gate.observe(is_fist),
            None => None,
        };

        FrameOutcome { volume, bar, mute }
    }

    pub fn is_muted(&self) -> bool {
        self.gate.is_muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::landmark::{LandmarkPoint, FINGER_BASES, FINGER_TIPS};

    fn point(id: u8, x: f64, y: f64) -> LandmarkPoint {
        LandmarkPoint { id, x, y }
    }

    fn pipeline() -> GesturePipeline {
        GesturePipeline::new(
            RangeMap::new(30.0, 250.0, -65.25, 0.0).unwrap(),
            RangeMap::new(30.0, 250.0, 400.0, 150.0).unwrap(),
        )
    }

    fn fist_points() -> Vec<LandmarkPoint> {
        let mut points = Vec::new();
        for &tip in FINGER_TIPS.iter() {
            points.push(point(tip, 100.0, 200.0));
        }
        for &base in FINGER_BASES.iter() {
            points.push(point(base, 100.0, 150.0));
        }
        points
    }

    fn open_points() -> Vec<LandmarkPoint> {
        let mut points = Vec::new();
        for &tip in FINGER_TIPS.iter() {
            points.push(point(tip, 100.0, 100.0));
        }
        for &base in FINGER_BASES.iter() {
            points.push(point(base, 100.0, 150.0));
        }
        points
    }

    #[test]
    fn test_concrete_frame_maps_both_paths() {
        let mut pipeline = pipeline();
        // Thumb at (100,100), index overridden to (130,140): distance 50.
        let mut points = open_points();
        points.push(point(4, 100.0, 100.0));
        for p in points.iter_mut() {
            if p.id == 8 {
                p.x = 130.0;
                p.y = 140.0;
            }
        }
        let outcome = pipeline.process(&HandFrame::new(points));

        let expected_vol = -65.25 + (50.0 - 30.0) / (250.0 - 30.0) * (0.0 - -65.25);
        let expected_bar = 400.0 + (50.0 - 30.0) / (250.0 - 30.0) * (150.0 - 400.0);
        assert_eq!(outcome.volume, Some(expected_vol));
        assert_eq!(outcome.bar, Some(expected_bar));
    }

    #[test]
    fn test_missing_index_tip_skips_volume_path() {
        let mut pipeline = pipeline();
        let mut points = fist_points();
        points.push(point(4, 100.0, 100.0));
        points.retain(|p| p.id != 8);
        let outcome = pipeline.process(&HandFrame::new(points));
        assert_eq!(outcome.volume, None);
        assert_eq!(outcome.bar, None);
        // Mute path also lacks tip 8, so the gate must not have advanced.
        assert!(!pipeline.is_muted());
    }

    #[test]
    fn test_fist_frame_emits_mute_once() {
        let mut pipeline = pipeline();
        let frame = HandFrame::new(fist_points());

        let first = pipeline.process(&frame);
        assert_eq!(first.mute, Some(true));
        assert!(pipeline.is_muted());

        let second = pipeline.process(&frame);
        assert_eq!(second.mute, None);
        assert!(pipeline.is_muted());
    }

    #[test]
    fn test_open_hand_after_fist_unmutes() {
        let mut pipeline = pipeline();
        assert_eq!(pipeline.process(&HandFrame::new(fist_points())).mute, Some(true));
        assert_eq!(pipeline.process(&HandFrame::new(open_points())).mute, Some(false));
        assert!(!pipeline.is_muted());
    }

    #[test]
    fn test_partial_frame_does_not_advance_gate() {
        let mut pipeline = pipeline();
        let mut partial = fist_points();
        partial.retain(|p| p.id != 14);

        let outcome = pipeline.process(&HandFrame::new(partial));
        assert_eq!(outcome.mute, None);
        assert!(!pipeline.is_muted());

        // The next complete fist still fires the initial transition.
        let outcome = pipeline.process(&HandFrame::new(fist_points()));
        assert_eq!(outcome.mute, Some(true));
    }

    #[test]
    fn test_empty_frame_produces_nothing() {
        let mut pipeline = pipeline();
        let outcome = pipeline.process(&HandFrame::default());
        assert_eq!(
            outcome,
            FrameOutcome {
                volume: None,
                bar: None,
                mute: None
            }
        );
    }

    #[test]
    fn test_paths_are_independent() {
        let mut pipeline = pipeline();
        // Pinch landmarks only: volume path runs, mute path skips.
        let frame = HandFrame::new(vec![
            point(4, 100.0, 100.0),
            point(8, 130.0, 140.0),
        ]);
        let outcome = pipeline.process(&frame);
        assert!(outcome.volume.is_some());
        assert_eq!(outcome.mute, None);
    }
}
