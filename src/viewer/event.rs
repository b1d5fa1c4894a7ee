use tokio::sync::mpsc;
use tracing::debug;

/// Signals raised by the external viewer surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    /// The model finished loading and is on screen
    Loaded { model_url: String },
}

/// Sender half handed to a surface on mount
#[derive(Debug, Clone)]
pub struct ViewerEventSender {
    inner: mpsc::Sender<ViewerEvent>,
}

impl ViewerEventSender {
    pub fn new(sender: mpsc::Sender<ViewerEvent>) -> Self {
        Self { inner: sender }
    }

    /// Deliver an event, waiting for capacity
    pub async fn send(&self, event: ViewerEvent) {
        if self.inner.send(event).await.is_err() {
            debug!("viewer event dropped: detail view already closed");
        }
    }
}
