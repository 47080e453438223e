use analytics::{ClassifierThresholds, Keypoint, PoseEstimate, PoseLabel, classify};

fn pose(points: &[(&str, f32, f32)]) -> PoseEstimate {
    PoseEstimate::new(
        points
            .iter()
            .map(|&(name, x, y)| Keypoint::new(name, x, y, 0.9))
            .collect(),
    )
}

fn label(points: &[(&str, f32, f32)]) -> PoseLabel {
    classify(Some(&pose(points)), &ClassifierThresholds::default())
}

#[test]
fn test_standing_level_and_aligned() {
    let result = label(&[
        ("nose", 150.0, 50.0),
        ("left_shoulder", 100.0, 100.0),
        ("right_shoulder", 200.0, 100.0),
        ("left_hip", 110.0, 250.0),
        ("right_hip", 190.0, 250.0),
    ]);
    assert_eq!(result, PoseLabel::Standing);
}

#[test]
fn test_standing_requires_nose() {
    let result = label(&[
        ("left_shoulder", 100.0, 100.0),
        ("right_shoulder", 200.0, 100.0),
        ("left_hip", 110.0, 250.0),
        ("right_hip", 190.0, 250.0),
    ]);
    assert_eq!(result, PoseLabel::Unknown);
}

#[test]
fn test_missing_left_hip_never_standing() {
    let result = label(&[
        ("nose", 150.0, 50.0),
        ("left_shoulder", 100.0, 100.0),
        ("right_shoulder", 200.0, 100.0),
        ("right_hip", 190.0, 250.0),
        ("left_knee", 110.0, 350.0),
        ("right_knee", 190.0, 350.0),
    ]);
    assert_ne!(result, PoseLabel::Standing);
}

#[test]
fn test_missing_left_hip_falls_through_to_raising_hand() {
    let result = label(&[
        ("nose", 150.0, 50.0),
        ("left_shoulder", 100.0, 100.0),
        ("right_shoulder", 200.0, 100.0),
        ("right_hip", 190.0, 250.0),
        ("left_wrist", 100.0, 30.0),
        ("right_wrist", 200.0, 170.0),
    ]);
    assert_eq!(result, PoseLabel::RaisingHand);
}

#[test]
fn test_tilted_shoulders_not_standing() {
    let result = label(&[
        ("nose", 150.0, 50.0),
        ("left_shoulder", 100.0, 100.0),
        ("right_shoulder", 200.0, 140.0),
        ("left_hip", 110.0, 250.0),
        ("right_hip", 190.0, 250.0),
    ]);
    assert_eq!(result, PoseLabel::Unknown);
}

#[test]
fn test_leaning_torso_not_standing() {
    let result = label(&[
        ("nose", 150.0, 50.0),
        ("left_shoulder", 100.0, 100.0),
        ("right_shoulder", 200.0, 100.0),
        ("left_hip", 150.0, 250.0),
        ("right_hip", 250.0, 250.0),
    ]);
    assert_eq!(result, PoseLabel::Unknown);
}

#[test]
fn test_raising_left_hand() {
    let result = label(&[
        ("left_shoulder", 100.0, 100.0),
        ("right_shoulder", 200.0, 100.0),
        ("left_wrist", 100.0, 30.0),
        ("right_wrist", 200.0, 170.0),
    ]);
    assert_eq!(result, PoseLabel::RaisingHand);
}

#[test]
fn test_raising_right_hand() {
    let result = label(&[
        ("left_shoulder", 100.0, 100.0),
        ("right_shoulder", 200.0, 100.0),
        ("left_wrist", 100.0, 170.0),
        ("right_wrist", 200.0, 20.0),
    ]);
    assert_eq!(result, PoseLabel::RaisingHand);
}

#[test]
fn test_raise_compares_same_side_only() {
    // Left wrist is well above the right shoulder but not above the left one.
    let result = label(&[
        ("left_shoulder", 100.0, 60.0),
        ("right_shoulder", 200.0, 140.0),
        ("left_wrist", 100.0, 40.0),
        ("right_wrist", 200.0, 170.0),
    ]);
    assert_eq!(result, PoseLabel::Unknown);
}

#[test]
fn test_raise_offset_is_strict() {
    let result = label(&[
        ("left_shoulder", 100.0, 100.0),
        ("right_shoulder", 200.0, 100.0),
        ("left_wrist", 100.0, 50.0),
        ("right_wrist", 200.0, 170.0),
    ]);
    assert_eq!(result, PoseLabel::Unknown);
}

#[test]
fn test_t_pose() {
    let result = label(&[
        ("left_shoulder", 200.0, 100.0),
        ("right_shoulder", 300.0, 100.0),
        ("left_elbow", 0.0, 0.0),
        ("right_elbow", 999.0, 999.0),
        ("left_wrist", 100.0, 100.0),
        ("right_wrist", 400.0, 100.0),
    ]);
    assert_eq!(result, PoseLabel::TPose);
}

#[test]
fn test_t_pose_requires_elbows() {
    let result = label(&[
        ("left_shoulder", 200.0, 100.0),
        ("right_shoulder", 300.0, 100.0),
        ("left_elbow", 150.0, 100.0),
        ("left_wrist", 100.0, 100.0),
        ("right_wrist", 400.0, 100.0),
    ]);
    assert_eq!(result, PoseLabel::Unknown);
}

#[test]
fn test_t_pose_arms_not_extended() {
    let result = label(&[
        ("left_shoulder", 200.0, 100.0),
        ("right_shoulder", 300.0, 100.0),
        ("left_elbow", 180.0, 100.0),
        ("right_elbow", 320.0, 100.0),
        ("left_wrist", 170.0, 100.0),
        ("right_wrist", 330.0, 100.0),
    ]);
    assert_eq!(result, PoseLabel::Unknown);
}

#[test]
fn test_standing_takes_priority_over_t_pose() {
    let result = label(&[
        ("nose", 250.0, 50.0),
        ("left_shoulder", 200.0, 100.0),
        ("right_shoulder", 300.0, 100.0),
        ("left_elbow", 150.0, 100.0),
        ("right_elbow", 350.0, 100.0),
        ("left_wrist", 100.0, 100.0),
        ("right_wrist", 400.0, 100.0),
        ("left_hip", 220.0, 250.0),
        ("right_hip", 280.0, 250.0),
    ]);
    assert_eq!(result, PoseLabel::Standing);
}

#[test]
fn test_absent_pose_is_unknown() {
    assert_eq!(classify(None, &ClassifierThresholds::default()), PoseLabel::Unknown);
    assert_eq!(
        classify(Some(&PoseEstimate::default()), &ClassifierThresholds::default()),
        PoseLabel::Unknown
    );
}

#[test]
fn test_custom_thresholds() {
    let loose = ClassifierThresholds {
        raise_offset: 10.0,
        ..ClassifierThresholds::default()
    };
    let p = pose(&[
        ("left_shoulder", 100.0, 100.0),
        ("right_shoulder", 200.0, 100.0),
        ("left_wrist", 100.0, 80.0),
        ("right_wrist", 200.0, 170.0),
    ]);
    assert_eq!(classify(Some(&p), &ClassifierThresholds::default()), PoseLabel::Unknown);
    assert_eq!(classify(Some(&p), &loose), PoseLabel::RaisingHand);
}

#[test]
fn test_label_display() {
    assert_eq!(PoseLabel::Standing.to_string(), "Standing");
    assert_eq!(PoseLabel::RaisingHand.to_string(), "Raising Hand");
    assert_eq!(PoseLabel::TPose.to_string(), "T-Pose");
    assert_eq!(PoseLabel::Unknown.to_string(), "Unknown Pose");
}
