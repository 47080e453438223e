use {
    crate::{
        geometry::{KeypointMap, index_by_name},
        model::{BodyPart, PoseEstimate},
    },
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Discrete pose recognized in a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoseLabel {
    Standing,
    RaisingHand,
    TPose,
    Unknown,
}

impl PoseLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            PoseLabel::Standing => "Standing",
            PoseLabel::RaisingHand => "Raising Hand",
            PoseLabel::TPose => "T-Pose",
            PoseLabel::Unknown => "Unknown Pose",
        }
    }
}

impl fmt::Display for PoseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pixel thresholds for the pose rules.
///
/// These are absolute image-space distances, so they only suit one camera
/// resolution and subject distance at a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierThresholds {
    /// Max height difference between paired joints that still counts as level.
    pub level_tolerance: f32,
    /// Max horizontal offset between shoulder and hip midpoints for an upright torso.
    pub alignment_tolerance: f32,
    /// How far a wrist must be above its shoulder to count as raised.
    pub raise_offset: f32,
    /// How far a wrist must be outside its shoulder to count as extended.
    pub extension_offset: f32,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            level_tolerance: 30.0,
            alignment_tolerance: 30.0,
            raise_offset: 50.0,
            extension_offset: 50.0,
        }
    }
}

/// Classify one pose. The first matching rule wins, in the order
/// Standing, RaisingHand, TPose; a rule whose keypoints are missing is skipped.
pub fn classify(pose: Option<&PoseEstimate>, thresholds: &ClassifierThresholds) -> PoseLabel {
    let map = index_by_name(pose);
    if is_standing(&map, thresholds).unwrap_or(false) {
        PoseLabel::Standing
    } else if is_raising_hand(&map, thresholds).unwrap_or(false) {
        PoseLabel::RaisingHand
    } else if is_t_pose(&map, thresholds).unwrap_or(false) {
        PoseLabel::TPose
    } else {
        PoseLabel::Unknown
    }
}

fn is_standing(map: &KeypointMap, t: &ClassifierThresholds) -> Option<bool> {
    map.get(BodyPart::Nose)?;
    let left_shoulder = map.position(BodyPart::LeftShoulder)?;
    let right_shoulder = map.position(BodyPart::RightShoulder)?;
    let left_hip = map.position(BodyPart::LeftHip)?;
    let right_hip = map.position(BodyPart::RightHip)?;

    let shoulders_level = (left_shoulder.y - right_shoulder.y).abs() < t.level_tolerance;
    let hips_level = (left_hip.y - right_hip.y).abs() < t.level_tolerance;
    let shoulder_mid = left_shoulder.midpoint(right_shoulder);
    let hip_mid = left_hip.midpoint(right_hip);
    let upright = (shoulder_mid.x - hip_mid.x).abs() < t.alignment_tolerance;

    Some(shoulders_level && hips_level && upright)
}

fn is_raising_hand(map: &KeypointMap, t: &ClassifierThresholds) -> Option<bool> {
    let left_shoulder = map.position(BodyPart::LeftShoulder)?;
    let right_shoulder = map.position(BodyPart::RightShoulder)?;
    let left_wrist = map.position(BodyPart::LeftWrist)?;
    let right_wrist = map.position(BodyPart::RightWrist)?;

    // Image y grows downward
    Some(
        left_wrist.y < left_shoulder.y - t.raise_offset
            || right_wrist.y < right_shoulder.y - t.raise_offset,
    )
}

fn is_t_pose(map: &KeypointMap, t: &ClassifierThresholds) -> Option<bool> {
    let left_shoulder = map.position(BodyPart::LeftShoulder)?;
    let right_shoulder = map.position(BodyPart::RightShoulder)?;
    map.get(BodyPart::LeftElbow)?;
    map.get(BodyPart::RightElbow)?;
    let left_wrist = map.position(BodyPart::LeftWrist)?;
    let right_wrist = map.position(BodyPart::RightWrist)?;

    let arms_level = (left_shoulder.y - left_wrist.y).abs() < t.level_tolerance
        && (right_shoulder.y - right_wrist.y).abs() < t.level_tolerance;
    let left_extended = left_wrist.x < left_shoulder.x - t.extension_offset;
    let right_extended = right_wrist.x > right_shoulder.x + t.extension_offset;

    Some(arms_level && left_extended && right_extended)
}
