use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};

use super::{ModelSource, ViewerEvent, ViewerEventSender, ViewerSurface};

/// A surface with no display attached.
///
/// It accepts every model, reports it loaded after `load_delay`, and logs the
/// pass-through commands. The shell uses it when no real renderer is wired in.
pub struct HeadlessViewer {
    load_delay: Duration,
    loaded: Arc<AtomicBool>,
}

impl HeadlessViewer {
    pub fn new() -> Self {
        Self::with_load_delay(Duration::ZERO)
    }

    pub fn with_load_delay(load_delay: Duration) -> Self {
        Self {
            load_delay,
            loaded: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Default for HeadlessViewer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ViewerSurface for HeadlessViewer {
    async fn mount(&self, source: &ModelSource, events: ViewerEventSender) -> Result<()> {
        info!(
            model_url = %source.model_url,
            auto_rotate = source.settings.auto_rotate,
            "mounting model"
        );
        self.loaded.store(false, Ordering::SeqCst);

        let loaded = Arc::clone(&self.loaded);
        let delay = self.load_delay;
        let model_url = source.model_url.clone();
        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            loaded.store(true, Ordering::SeqCst);
            events.send(ViewerEvent::Loaded { model_url }).await;
        });

        Ok(())
    }

    fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }

    fn reset_camera(&self, orbit: &str) {
        info!(orbit, "camera reset requested");
    }

    fn request_fullscreen(&self) {
        info!("fullscreen requested");
    }

    fn unmount(&self) {
        self.loaded.store(false, Ordering::SeqCst);
        debug!("model unmounted");
    }

    fn name(&self) -> &str {
        "headless"
    }
}
