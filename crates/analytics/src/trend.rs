use {crate::model::Frame, serde::Serialize};

/// One point of the confidence chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidencePoint {
    /// 1-based position inside the current window, oldest first.
    pub frame_index: usize,
    pub label: String,
    /// Mean keypoint score of the primary pose, 0 without one.
    pub value: f32,
}

/// Per-frame mean confidence for `frames` (oldest first), one point per frame.
///
/// Labels are window positions ("Frame 1", "Frame 2", ...) and restart on every call.
pub fn confidence_series<'a, I>(frames: I) -> Vec<ConfidencePoint>
where
    I: IntoIterator<Item = &'a Frame>,
{
    frames
        .into_iter()
        .enumerate()
        .map(|(i, frame)| ConfidencePoint {
            frame_index: i + 1,
            label: format!("Frame {}", i + 1),
            value: frame
                .primary()
                .and_then(|pose| pose.mean_score())
                .unwrap_or(0.0),
        })
        .collect()
}
