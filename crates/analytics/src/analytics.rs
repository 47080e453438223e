use {
    crate::{
        AnalyticsError,
        classifier::{PoseLabel, classify},
        config::AnalyticsConfig,
        history::History,
        model::Frame,
        sink::FrameSink,
        stability,
        trend::{ConfidencePoint, confidence_series},
    },
    serde::Serialize,
    std::fmt,
};

/// Whether any frame has been recorded in this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active,
}

/// Snapshot of the derived signals after the latest frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsResult {
    pub label: PoseLabel,
    pub stable: bool,
    pub mean_displacement: Option<f32>,
    pub confidence_series: Vec<ConfidencePoint>,
    /// Timestamp of the frame this result was computed for.
    pub last_updated: String,
    pub history_len: usize,
}

impl AnalyticsResult {
    /// Coaching hints for the current state.
    pub fn suggestions(&self) -> Vec<&'static str> {
        let mut hints = Vec::with_capacity(3);
        if self.stable {
            hints.push(
                "Great job maintaining a stable pose! Try to maintain it for 5 more seconds.",
            );
        } else {
            hints.push("Try to stand still and maintain a stable position.");
        }
        if self.label == PoseLabel::Unknown {
            hints.push("Try different poses like standing straight, T-pose, or raising a hand.");
        }
        hints.push("Make sure your full body is visible in the camera frame.");
        hints
    }

    /// Mean confidence of the newest frame.
    pub fn latest_confidence(&self) -> Option<f32> {
        self.confidence_series.last().map(|point| point.value)
    }
}

impl fmt::Display for AnalyticsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        if self.stable {
            write!(f, " (Stable)")?;
        }
        Ok(())
    }
}

/// Recompute every signal from `history`. `None` while the history is empty.
///
/// Pure: the same history and config always produce the same result.
pub fn evaluate(history: &History, config: &AnalyticsConfig) -> Option<AnalyticsResult> {
    let latest = history.latest()?;
    let label = classify(latest.primary(), &config.classifier);
    Some(summarize(history, label, latest.timestamp.clone(), config))
}

/// Window signals over `history` around an already classified newest frame.
fn summarize(
    history: &History,
    label: PoseLabel,
    last_updated: String,
    config: &AnalyticsConfig,
) -> AnalyticsResult {
    let stability = stability::analyze(history.recent(config.stability.window), &config.stability);
    AnalyticsResult {
        label,
        stable: stability.stable,
        mean_displacement: stability.mean_displacement,
        confidence_series: confidence_series(history.recent(config.trend_window)),
        last_updated,
        history_len: history.len(),
    }
}

/// Owns the frame history for one detection session and keeps the latest result.
///
/// Not internally synchronized; feed it from one place (see `AnalyticsPipeline`).
pub struct Analytics {
    config: AnalyticsConfig,
    history: History,
    result: Option<AnalyticsResult>,
    frames_recorded: u64,
    sink: Option<Box<dyn FrameSink>>,
}

impl fmt::Debug for Analytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analytics")
            .field("config", &self.config)
            .field("history", &self.history.len())
            .field("frames_recorded", &self.frames_recorded)
            .field("result", &self.result)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl Analytics {
    pub fn new(config: AnalyticsConfig) -> Result<Self, AnalyticsError> {
        config.validate()?;
        Ok(Self {
            history: History::with_capacity(config.history_capacity),
            config,
            result: None,
            frames_recorded: 0,
            sink: None,
        })
    }

    /// Offer every accepted frame to `sink` (builder pattern).
    pub fn with_sink(mut self, sink: impl FrameSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Latest published result, `None` until the first frame.
    pub fn result(&self) -> Option<&AnalyticsResult> {
        self.result.as_ref()
    }

    pub fn state(&self) -> SessionState {
        if self.frames_recorded == 0 {
            SessionState::Idle
        } else {
            SessionState::Active
        }
    }

    /// Frames accepted since the session started, evicted ones included.
    pub fn frames_recorded(&self) -> u64 {
        self.frames_recorded
    }

    /// Append `frame` and recompute the result.
    ///
    /// A frame that fails validation is rejected and leaves the history and
    /// the previous result untouched.
    pub fn record(&mut self, frame: Frame) -> Result<&AnalyticsResult, AnalyticsError> {
        frame.validate()?;

        if self.state() == SessionState::Idle {
            log::info!("analytics session started ({} model)", frame.model);
        }
        let label = classify(frame.primary(), &self.config.classifier);
        let last_updated = frame.timestamp.clone();
        self.history.push(frame);
        self.frames_recorded += 1;
        let result = summarize(&self.history, label, last_updated, &self.config);

        if let (Some(sink), Some(latest)) = (self.sink.as_mut(), self.history.latest()) {
            if let Err(error) = sink.offer(latest) {
                log::warn!("could not persist frame {}: {error}", latest.timestamp);
            }
        }

        log::debug!(
            "frame {}: {} stable={} history={}",
            self.frames_recorded,
            result.label,
            result.stable,
            result.history_len
        );
        Ok(&*self.result.insert(result))
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self {
            history: History::default(),
            config: AnalyticsConfig::default(),
            result: None,
            frames_recorded: 0,
            sink: None,
        }
    }
}

// Hosts move the orchestrator into async tasks
fn _assert_send() {
    fn assert<T: Send>() {}
    assert::<Analytics>();
}
