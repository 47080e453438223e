pub mod analytics;
pub mod classifier;
pub mod config;
pub mod error;
pub mod geometry;
pub mod history;
pub mod hold;
pub mod model;
pub mod pipeline;
pub mod sink;
pub mod stability;
pub mod trend;

pub use analytics::{Analytics, AnalyticsResult, SessionState, evaluate};
pub use classifier::{ClassifierThresholds, PoseLabel, classify};
pub use config::AnalyticsConfig;
pub use error::AnalyticsError;
pub use geometry::{KeypointMap, angle_at, distance, index_by_name};
pub use history::History;
pub use hold::{HoldEvent, HoldTrigger};
pub use model::{BodyPart, Frame, Keypoint, PoseEstimate, PoseModel};
pub use pipeline::AnalyticsPipeline;
pub use sink::FrameSink;
pub use stability::{Stability, StabilityConfig};
pub use trend::{ConfidencePoint, confidence_series};
