use crate::{analytics::AnalyticsResult, classifier::PoseLabel};

/// A recognized pose held still long enough to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldEvent {
    pub label: PoseLabel,
    /// Consecutive stable results observed when the event fired.
    pub frames: usize,
}

/// Fires once when the same recognized pose is reported stable for
/// `hold_frames` consecutive results.
///
/// An `Unknown` label, a different label or an unstable result resets the
/// streak and re-arms the trigger.
#[derive(Debug, Clone)]
pub struct HoldTrigger {
    hold_frames: usize,
    current: Option<PoseLabel>,
    streak: usize,
    fired: bool,
}

impl HoldTrigger {
    /// A `hold_frames` of 0 is raised to 1.
    pub fn new(hold_frames: usize) -> Self {
        Self {
            hold_frames: hold_frames.max(1),
            current: None,
            streak: 0,
            fired: false,
        }
    }

    pub fn observe(&mut self, result: &AnalyticsResult) -> Option<HoldEvent> {
        if !result.stable || result.label == PoseLabel::Unknown {
            self.reset();
            return None;
        }

        if self.current == Some(result.label) {
            self.streak += 1;
        } else {
            self.current = Some(result.label);
            self.streak = 1;
            self.fired = false;
        }

        if self.fired || self.streak < self.hold_frames {
            return None;
        }
        self.fired = true;
        log::info!("{} held for {} frames", result.label, self.streak);
        Some(HoldEvent {
            label: result.label,
            frames: self.streak,
        })
    }

    /// Fraction of the hold completed for the current pose, in [0, 1].
    pub fn progress(&self) -> f32 {
        (self.streak as f32 / self.hold_frames as f32).min(1.0)
    }

    pub fn reset(&mut self) {
        self.current = None;
        self.streak = 0;
        self.fired = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(label: PoseLabel, stable: bool) -> AnalyticsResult {
        AnalyticsResult {
            label,
            stable,
            mean_displacement: Some(0.0),
            confidence_series: Vec::new(),
            last_updated: String::new(),
            history_len: 10,
        }
    }

    #[test]
    fn test_fires_once_after_hold() {
        let mut trigger = HoldTrigger::new(3);
        let standing = result(PoseLabel::Standing, true);

        assert_eq!(trigger.observe(&standing), None);
        assert_eq!(trigger.observe(&standing), None);
        assert_eq!(
            trigger.observe(&standing),
            Some(HoldEvent {
                label: PoseLabel::Standing,
                frames: 3
            })
        );
        assert_eq!(trigger.observe(&standing), None);
        assert_eq!(trigger.progress(), 1.0);
    }

    #[test]
    fn test_instability_rearms() {
        let mut trigger = HoldTrigger::new(2);
        let t_pose = result(PoseLabel::TPose, true);

        trigger.observe(&t_pose);
        assert!(trigger.observe(&t_pose).is_some());
        trigger.observe(&result(PoseLabel::TPose, false));
        assert_eq!(trigger.progress(), 0.0);
        trigger.observe(&t_pose);
        assert!(trigger.observe(&t_pose).is_some());
    }

    #[test]
    fn test_label_change_restarts_streak() {
        let mut trigger = HoldTrigger::new(2);
        trigger.observe(&result(PoseLabel::Standing, true));
        assert_eq!(trigger.observe(&result(PoseLabel::RaisingHand, true)), None);
        assert_eq!(trigger.progress(), 0.5);
        assert!(trigger.observe(&result(PoseLabel::RaisingHand, true)).is_some());
    }

    #[test]
    fn test_unknown_never_fires() {
        let mut trigger = HoldTrigger::new(1);
        assert_eq!(trigger.observe(&result(PoseLabel::Unknown, true)), None);
    }
}
