use {
    crate::{
        AnalyticsError,
        analytics::{Analytics, AnalyticsResult},
        model::Frame,
    },
    futures_core::Stream,
    futures_sink::Sink,
    std::{
        collections::VecDeque,
        fmt,
        pin::Pin,
        task::{Context, Poll, Waker},
    },
};

/// Async adapter around [`Analytics`].
///
/// Implements `Sink<Frame>` to accept frames and
/// `Stream<Item = Result<AnalyticsResult>>` to publish results. Each frame
/// sent maps 1:1 to one item yielded, in arrival order; a rejected frame
/// yields an `Err` and the stream carries on. Closing the sink ends the
/// stream once every queued frame has been processed.
pub struct AnalyticsPipeline {
    analytics: Analytics,
    pending: VecDeque<Frame>,
    closed: bool,
    stream_waker: Option<Waker>,
}

impl fmt::Debug for AnalyticsPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyticsPipeline")
            .field("analytics", &self.analytics)
            .field("pending", &self.pending.len())
            .field("closed", &self.closed)
            .finish()
    }
}

impl AnalyticsPipeline {
    pub fn new(analytics: Analytics) -> Self {
        Self {
            analytics,
            pending: VecDeque::new(),
            closed: false,
            stream_waker: None,
        }
    }

    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    /// Frames accepted by the sink but not yet analyzed.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn into_inner(self) -> Analytics {
        self.analytics
    }

    fn wake_stream(&mut self) {
        if let Some(waker) = self.stream_waker.take() {
            waker.wake();
        }
    }
}

impl Sink<Frame> for AnalyticsPipeline {
    type Error = AnalyticsError;

    fn poll_ready(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), AnalyticsError>> {
        Poll::Ready(Ok(()))
    }

    fn start_send(self: Pin<&mut Self>, item: Frame) -> Result<(), AnalyticsError> {
        let this = self.get_mut();
        this.pending.push_back(item);
        this.wake_stream();
        Ok(())
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), AnalyticsError>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), AnalyticsError>> {
        let this = self.get_mut();
        this.closed = true;
        this.wake_stream();
        Poll::Ready(Ok(()))
    }
}

impl Stream for AnalyticsPipeline {
    type Item = Result<AnalyticsResult, AnalyticsError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if let Some(frame) = this.pending.pop_front() {
            let outcome = this.analytics.record(frame).cloned();
            if let Err(error) = &outcome {
                log::warn!("frame rejected: {error}");
            }
            return Poll::Ready(Some(outcome));
        }

        if this.closed {
            return Poll::Ready(None);
        }

        this.stream_waker = Some(cx.waker().clone());
        Poll::Pending
    }
}
