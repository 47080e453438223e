use {
    crate::AnalyticsError,
    base::Vec2,
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

/// Named body landmarks understood by the classifiers, in COCO order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl BodyPart {
    pub const COUNT: usize = 17;

    pub const ALL: [BodyPart; BodyPart::COUNT] = [
        BodyPart::Nose,
        BodyPart::LeftEye,
        BodyPart::RightEye,
        BodyPart::LeftEar,
        BodyPart::RightEar,
        BodyPart::LeftShoulder,
        BodyPart::RightShoulder,
        BodyPart::LeftElbow,
        BodyPart::RightElbow,
        BodyPart::LeftWrist,
        BodyPart::RightWrist,
        BodyPart::LeftHip,
        BodyPart::RightHip,
        BodyPart::LeftKnee,
        BodyPart::RightKnee,
        BodyPart::LeftAnkle,
        BodyPart::RightAnkle,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire name as produced by the pose-estimation models.
    pub fn as_str(self) -> &'static str {
        match self {
            BodyPart::Nose => "nose",
            BodyPart::LeftEye => "left_eye",
            BodyPart::RightEye => "right_eye",
            BodyPart::LeftEar => "left_ear",
            BodyPart::RightEar => "right_ear",
            BodyPart::LeftShoulder => "left_shoulder",
            BodyPart::RightShoulder => "right_shoulder",
            BodyPart::LeftElbow => "left_elbow",
            BodyPart::RightElbow => "right_elbow",
            BodyPart::LeftWrist => "left_wrist",
            BodyPart::RightWrist => "right_wrist",
            BodyPart::LeftHip => "left_hip",
            BodyPart::RightHip => "right_hip",
            BodyPart::LeftKnee => "left_knee",
            BodyPart::RightKnee => "right_knee",
            BodyPart::LeftAnkle => "left_ankle",
            BodyPart::RightAnkle => "right_ankle",
        }
    }
}

impl FromStr for BodyPart {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        BodyPart::ALL
            .iter()
            .copied()
            .find(|part| part.as_str() == name)
            .ok_or_else(|| format!("unknown body part: {name}"))
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pose-estimation model that produced a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoseModel {
    MoveNet,
    BlazePose,
    PoseNet,
}

impl PoseModel {
    pub fn as_str(self) -> &'static str {
        match self {
            PoseModel::MoveNet => "movenet",
            PoseModel::BlazePose => "blazepose",
            PoseModel::PoseNet => "posenet",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PoseModel::MoveNet => {
                "MoveNet is optimized for speed and works well on mobile devices."
            }
            PoseModel::BlazePose => {
                "BlazePose provides the most accurate pose detection but may be slower."
            }
            PoseModel::PoseNet => "PoseNet offers a good balance between speed and accuracy.",
        }
    }
}

impl fmt::Display for PoseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named keypoint with image-space position and confidence.
///
/// Names outside [`BodyPart`] are kept as-is; they take part in stability and
/// confidence averaging but are invisible to name lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "KeypointRecord", into = "KeypointRecord")]
pub struct Keypoint {
    pub name: String,
    pub position: Vec2<f32>,
    /// Confidence in [0.0, 1.0].
    pub score: f32,
}

impl Keypoint {
    pub fn new(name: impl Into<String>, x: f32, y: f32, score: f32) -> Self {
        Self {
            name: name.into(),
            position: Vec2::new(x, y),
            score,
        }
    }

    pub fn part(&self) -> Option<BodyPart> {
        self.name.parse().ok()
    }
}

// Flat wire shape: {"name", "x", "y", "score"}
#[derive(Serialize, Deserialize)]
struct KeypointRecord {
    name: String,
    x: f32,
    y: f32,
    score: f32,
}

impl From<KeypointRecord> for Keypoint {
    fn from(record: KeypointRecord) -> Self {
        Keypoint::new(record.name, record.x, record.y, record.score)
    }
}

impl From<Keypoint> for KeypointRecord {
    fn from(keypoint: Keypoint) -> Self {
        KeypointRecord {
            name: keypoint.name,
            x: keypoint.position.x,
            y: keypoint.position.y,
            score: keypoint.score,
        }
    }
}

/// Keypoints of one detected body.
///
/// Sequence order is meaningful: frames from the same model list keypoints in
/// the same order, and movement is measured index by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseEstimate {
    pub keypoints: Vec<Keypoint>,
    /// Overall detection score, when the model reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl PoseEstimate {
    pub fn new(keypoints: Vec<Keypoint>) -> Self {
        Self {
            keypoints,
            score: None,
        }
    }

    /// Mean keypoint confidence, or `None` without keypoints.
    pub fn mean_score(&self) -> Option<f32> {
        if self.keypoints.is_empty() {
            return None;
        }
        let total: f32 = self.keypoints.iter().map(|kp| kp.score).sum();
        Some(total / self.keypoints.len() as f32)
    }
}

/// One detection cycle's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// ISO-8601 capture time, passed through untouched.
    pub timestamp: String,
    pub model: PoseModel,
    #[serde(default)]
    pub poses: Vec<PoseEstimate>,
}

impl Frame {
    pub fn new(timestamp: impl Into<String>, model: PoseModel, poses: Vec<PoseEstimate>) -> Self {
        Self {
            timestamp: timestamp.into(),
            model,
            poses,
        }
    }

    /// The first detected body, treated as the subject of interest.
    pub fn primary(&self) -> Option<&PoseEstimate> {
        self.poses.first()
    }

    /// Parse and validate a frame from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, AnalyticsError> {
        let frame: Frame = serde_json::from_str(json)
            .map_err(|e| AnalyticsError::InvalidFrame(e.to_string()))?;
        frame.validate()?;
        Ok(frame)
    }

    pub fn to_json(&self) -> Result<String, AnalyticsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject values the analytics cannot reason about: non-finite coordinates,
    /// scores outside [0, 1], and unnamed keypoints.
    ///
    /// Missing keypoints and empty pose lists are valid.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        for (pose_index, pose) in self.poses.iter().enumerate() {
            for (kp_index, keypoint) in pose.keypoints.iter().enumerate() {
                let at = || format!("pose {pose_index}, keypoint {kp_index} ({})", keypoint.name);
                if keypoint.name.is_empty() {
                    return Err(AnalyticsError::InvalidFrame(format!(
                        "pose {pose_index}, keypoint {kp_index} has an empty name"
                    )));
                }
                if !keypoint.position.is_finite() {
                    return Err(AnalyticsError::InvalidFrame(format!(
                        "{}: non-finite position {:?}",
                        at(),
                        keypoint.position
                    )));
                }
                if !(0.0..=1.0).contains(&keypoint.score) {
                    return Err(AnalyticsError::InvalidFrame(format!(
                        "{}: score {} outside [0, 1]",
                        at(),
                        keypoint.score
                    )));
                }
            }
        }
        Ok(())
    }
}
