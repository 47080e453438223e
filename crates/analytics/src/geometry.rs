use {
    crate::model::{BodyPart, Keypoint, PoseEstimate},
    base::Vec2,
};

/// Angle at `vertex` between the rays to `p1` and `p3`, in degrees [0, 180].
///
/// Returns 0 when any point is missing or either ray has zero length.
pub fn angle_at(p1: Option<Vec2<f32>>, vertex: Option<Vec2<f32>>, p3: Option<Vec2<f32>>) -> f32 {
    let (Some(p1), Some(vertex), Some(p3)) = (p1, vertex, p3) else {
        return 0.0;
    };

    // f64 keeps products of finite f32 coordinates finite and nonzero
    let v1 = widen(p1) - widen(vertex);
    let v2 = widen(p3) - widen(vertex);
    let magnitudes = v1.length_squared().sqrt() * v2.length_squared().sqrt();
    if magnitudes == 0.0 {
        return 0.0;
    }

    let cos = v1.dot(v2) / magnitudes;
    if !cos.is_finite() {
        return 0.0;
    }
    // Rounding can push the cosine just past +-1
    cos.clamp(-1.0, 1.0).acos().to_degrees() as f32
}

fn widen(point: Vec2<f32>) -> Vec2<f64> {
    Vec2::new(f64::from(point.x), f64::from(point.y))
}

/// Euclidean distance, 0 when either point is missing.
pub fn distance(p1: Option<Vec2<f32>>, p2: Option<Vec2<f32>>) -> f32 {
    match (p1, p2) {
        (Some(p1), Some(p2)) => p1.distance_to(p2),
        _ => 0.0,
    }
}

/// Keypoints of one pose addressed by [`BodyPart`].
#[derive(Debug, Clone, Copy)]
pub struct KeypointMap<'a> {
    slots: [Option<&'a Keypoint>; BodyPart::COUNT],
}

impl<'a> KeypointMap<'a> {
    pub fn empty() -> Self {
        Self {
            slots: [None; BodyPart::COUNT],
        }
    }

    pub fn get(&self, part: BodyPart) -> Option<&'a Keypoint> {
        self.slots[part.index()]
    }

    pub fn position(&self, part: BodyPart) -> Option<Vec2<f32>> {
        self.get(part).map(|kp| kp.position)
    }

    pub fn contains(&self, part: BodyPart) -> bool {
        self.slots[part.index()].is_some()
    }

    pub fn contains_all(&self, parts: &[BodyPart]) -> bool {
        parts.iter().all(|&part| self.contains(part))
    }

    /// Number of recognized body parts present.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl Default for KeypointMap<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Index a pose's keypoints by body part in one pass.
///
/// Unrecognized names are skipped; when a name repeats, the last one wins.
pub fn index_by_name(pose: Option<&PoseEstimate>) -> KeypointMap<'_> {
    let mut map = KeypointMap::empty();
    if let Some(pose) = pose {
        for keypoint in &pose.keypoints {
            if let Some(part) = keypoint.part() {
                map.slots[part.index()] = Some(keypoint);
            }
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Option<Vec2<f32>> {
        Some(Vec2::new(x, y))
    }

    #[test]
    fn test_right_angle() {
        let angle = angle_at(p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0));
        assert!((angle - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_straight_and_folded() {
        let straight = angle_at(p(-1.0, 0.0), p(0.0, 0.0), p(2.0, 0.0));
        assert!((straight - 180.0).abs() < 0.1);
        let folded = angle_at(p(3.0, 3.0), p(0.0, 0.0), p(1.0, 1.0));
        assert!(folded.abs() < 0.1);
    }

    #[test]
    fn test_angle_missing_point_is_zero() {
        assert_eq!(angle_at(None, p(0.0, 0.0), p(1.0, 0.0)), 0.0);
        assert_eq!(angle_at(p(1.0, 0.0), None, p(1.0, 0.0)), 0.0);
        assert_eq!(angle_at(p(1.0, 0.0), p(0.0, 0.0), None), 0.0);
    }

    #[test]
    fn test_angle_degenerate_ray_is_zero() {
        assert_eq!(angle_at(p(0.0, 0.0), p(0.0, 0.0), p(1.0, 0.0)), 0.0);
    }

    #[test]
    fn test_angle_large_coordinates_stay_in_range() {
        let same_way = angle_at(p(1e20, 0.0), p(0.0, 0.0), p(2e20, 0.0));
        assert!(same_way.abs() < 0.1, "got {same_way}");
        let far_apart = angle_at(p(3e38, 0.0), p(-3e38, 0.0), p(-3e38, 3e38));
        assert!((far_apart - 90.0).abs() < 0.1, "got {far_apart}");
        let straight = angle_at(p(-1e30, 1e30), p(0.0, 0.0), p(1e30, -1e30));
        assert!((straight - 180.0).abs() < 0.1, "got {straight}");
    }

    #[test]
    fn test_angle_tiny_rays_keep_their_angle() {
        let angle = angle_at(p(1e-25, 0.0), p(0.0, 0.0), p(0.0, 1e-25));
        assert!((angle - 90.0).abs() < 1e-3, "got {angle}");
        let subnormal = angle_at(p(1e-44, 0.0), p(0.0, 0.0), p(-1e-44, 0.0));
        assert!((subnormal - 180.0).abs() < 0.1, "got {subnormal}");
    }

    #[test]
    fn test_distance_large_coordinates() {
        assert_eq!(distance(p(0.0, 0.0), p(1e20, 0.0)), 1e20);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(p(0.0, 0.0), p(3.0, 4.0)), 5.0);
        assert_eq!(distance(None, p(3.0, 4.0)), 0.0);
        assert_eq!(distance(p(3.0, 4.0), None), 0.0);
    }

    #[test]
    fn test_index_by_name() {
        let pose = PoseEstimate::new(vec![
            Keypoint::new("nose", 1.0, 2.0, 0.9),
            Keypoint::new("left_pinky", 5.0, 5.0, 0.9),
            Keypoint::new("left_wrist", 3.0, 4.0, 0.8),
        ]);
        let map = index_by_name(Some(&pose));
        assert_eq!(map.len(), 2);
        assert_eq!(map.position(BodyPart::Nose), Some(Vec2::new(1.0, 2.0)));
        assert_eq!(map.get(BodyPart::LeftWrist).map(|kp| kp.score), Some(0.8));
        assert!(!map.contains(BodyPart::RightWrist));
        assert!(map.contains_all(&[BodyPart::Nose, BodyPart::LeftWrist]));
        assert!(!map.contains_all(&[BodyPart::Nose, BodyPart::LeftHip]));
    }

    #[test]
    fn test_index_by_name_last_duplicate_wins() {
        let pose = PoseEstimate::new(vec![
            Keypoint::new("nose", 1.0, 1.0, 0.9),
            Keypoint::new("nose", 7.0, 7.0, 0.4),
        ]);
        let map = index_by_name(Some(&pose));
        assert_eq!(map.position(BodyPart::Nose), Some(Vec2::new(7.0, 7.0)));
    }

    #[test]
    fn test_index_absent_pose_is_empty() {
        assert!(index_by_name(None).is_empty());
        assert!(index_by_name(Some(&PoseEstimate::default())).is_empty());
    }
}
