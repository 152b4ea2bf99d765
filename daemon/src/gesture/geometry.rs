use shared::landmark::LandmarkPoint;

/// Euclidean distance between two landmarks in pixel space.
///
/// Coincident points yield 0.0, which is valid input to the range
/// mapper (clamps to the codomain's lower end).
pub fn landmark_distance(a: &LandmarkPoint, b: &LandmarkPoint) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}
