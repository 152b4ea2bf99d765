use serde::{Deserialize, Serialize};

/// Number of keypoints in the fixed hand topology.
pub const LANDMARK_COUNT: usize = 21;

/// Thumb tip id in the 21-point hand topology.
pub const THUMB_TIP: u8 = 4;
/// Index fingertip id, the second point of the pinch-distance pair.
pub const INDEX_TIP: u8 = 8;

/// Fingertip ids for the fist test: index, middle, ring, pinky.
/// The thumb (tip 4, joint 2) is excluded from the test.
pub const FINGER_TIPS: [u8; 4] = [8, 12, 16, 20];
/// Base joint ids directly below each tip in [`FINGER_TIPS`].
pub const FINGER_BASES: [u8; 4] = [6, 10, 14, 18];

/// One labeled keypoint on a detected hand, in pixel space.
/// `y` grows downward, matching image coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LandmarkPoint {
    pub id: u8,
    pub x: f64,
    pub y: f64,
}

/// One frame of landmarks for a single detected hand.
///
/// Frames arrive from the external detector and may be partial; callers
/// must treat a missing id as "skip this frame", never as an error.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct HandFrame {
    pub points: Vec<LandmarkPoint>,
}

impl HandFrame {
    pub fn new(points: Vec<LandmarkPoint>) -> Self {
        Self { points }
    }

    /// Look up a landmark by topology id.
    pub fn point(&self, id: u8) -> Option<&LandmarkPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// True when every id in `ids` is present in this frame.
    pub fn has_all(&self, ids: &[u8]) -> bool {
        ids.iter().all(|&id| self.point(id).is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> HandFrame {
        HandFrame::new(vec![
            LandmarkPoint { id: 4, x: 100.0, y: 100.0 },
            LandmarkPoint { id: 8, x: 130.0, y: 140.0 },
        ])
    }

    #[test]
    fn test_point_lookup_present() {
        let frame = sample_frame();
        let p = frame.point(4).unwrap();
        assert_eq!(p.x, 100.0);
        assert_eq!(p.y, 100.0);
    }

    #[test]
    fn test_point_lookup_absent() {
        let frame = sample_frame();
        assert!(frame.point(12).is_none());
    }

    #[test]
    fn test_has_all_with_partial_frame() {
        let frame = sample_frame();
        assert!(frame.has_all(&[4, 8]));
        assert!(!frame.has_all(&FINGER_TIPS));
    }

    #[test]
    fn test_has_all_empty_id_set() {
        let frame = HandFrame::default();
        assert!(frame.has_all(&[]));
        assert!(frame.is_empty());
    }

    #[test]
    fn test_tip_and_base_ids_pair_up() {
        assert_eq!(FINGER_TIPS.len(), FINGER_BASES.len());
        for (tip, base) in FINGER_TIPS.iter().zip(FINGER_BASES.iter()) {
            assert_eq!(tip - base, 2);
        }
    }

    #[test]
    fn test_frame_json_shape() {
        let frame = sample_frame();
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains(r#""id":4"#));
        let parsed: HandFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(frame, parsed);
    }

    #[test]
    fn test_frame_parses_detector_line() {
        let line = r#"{"points":[{"id":0,"x":320.0,"y":240.0},{"id":4,"x":300.5,"y":210.25}]}"#;
        let frame: HandFrame = serde_json::from_str(line).unwrap();
        assert_eq!(frame.points.len(), 2);
        assert_eq!(frame.point(4).unwrap().x, 300.5);
    }
}
