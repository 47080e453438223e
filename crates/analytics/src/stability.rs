use {
    crate::model::{Frame, PoseEstimate},
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilityConfig {
    /// Number of trailing frames examined.
    pub window: usize,
    /// Frames with a non-empty primary pose needed before any verdict can be stable.
    pub min_usable_frames: usize,
    /// Mean per-keypoint displacement (pixels per frame) below which the subject is still.
    pub max_mean_displacement: f32,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            window: 10,
            min_usable_frames: 5,
            max_mean_displacement: 3.0,
        }
    }
}

/// Movement summary over a window of frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stability {
    pub stable: bool,
    /// `None` when no keypoint pair could be compared.
    pub mean_displacement: Option<f32>,
    pub usable_frames: usize,
    pub compared_pairs: usize,
}

impl Stability {
    fn unstable(usable_frames: usize) -> Self {
        Self {
            stable: false,
            mean_displacement: None,
            usable_frames,
            compared_pairs: 0,
        }
    }
}

/// Judge whether the subject held still across `frames` (oldest first).
///
/// Each adjacent pair of frames that both carry a non-empty primary pose contributes one
/// displacement per keypoint index present in both; keypoints are matched by
/// position in the sequence, not by name. Frames without a primary pose drop
/// out of the average instead of counting as zero movement.
pub fn analyze<'a, I>(frames: I, config: &StabilityConfig) -> Stability
where
    I: IntoIterator<Item = &'a Frame>,
{
    // A primary pose without keypoints carries nothing to compare
    let primaries: Vec<Option<&PoseEstimate>> = frames
        .into_iter()
        .map(|frame| frame.primary().filter(|pose| !pose.keypoints.is_empty()))
        .collect();
    let usable_frames = primaries.iter().filter(|pose| pose.is_some()).count();
    if usable_frames < config.min_usable_frames {
        return Stability::unstable(usable_frames);
    }

    let mut total = 0.0f32;
    let mut samples = 0usize;
    let mut compared_pairs = 0usize;
    for pair in primaries.windows(2) {
        let (Some(previous), Some(current)) = (pair[0], pair[1]) else {
            continue;
        };
        compared_pairs += 1;
        for (before, after) in previous.keypoints.iter().zip(&current.keypoints) {
            total += before.position.distance_to(after.position);
            samples += 1;
        }
    }

    if samples == 0 {
        return Stability {
            compared_pairs,
            ..Stability::unstable(usable_frames)
        };
    }

    let mean = total / samples as f32;
    Stability {
        stable: mean < config.max_mean_displacement,
        mean_displacement: Some(mean),
        usable_frames,
        compared_pairs,
    }
}
