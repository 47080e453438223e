use crate::{AnalyticsError, model::Frame};

/// Best-effort storage for recorded frames.
///
/// Called once per accepted frame after analytics are updated. Errors are
/// logged by the caller and never reach the analytics consumer.
pub trait FrameSink: Send {
    fn offer(&mut self, frame: &Frame) -> Result<(), AnalyticsError>;
}

impl<F> FrameSink for F
where
    F: FnMut(&Frame) -> Result<(), AnalyticsError> + Send,
{
    fn offer(&mut self, frame: &Frame) -> Result<(), AnalyticsError> {
        self(frame)
    }
}
