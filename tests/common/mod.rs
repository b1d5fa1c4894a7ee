#![allow(dead_code)]

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use frac_showcase::{ModelSource, ViewerEvent, ViewerEventSender, ViewerSurface};

/// A viewer surface that records every call it receives.
///
/// Load events are only sent when the test asks for them via `finish_load`.
#[derive(Default)]
pub struct MockViewer {
    calls: Mutex<Vec<String>>,
    sender: Mutex<Option<(ViewerEventSender, String)>>,
    loaded_on_mount: bool,
    fail_mount: bool,
}

impl MockViewer {
    /// A surface that reports the model loaded before anyone listens
    pub fn preloaded() -> Self {
        Self {
            loaded_on_mount: true,
            ..Self::default()
        }
    }

    /// A surface whose mount always fails
    pub fn failing() -> Self {
        Self {
            fail_mount: true,
            ..Self::default()
        }
    }

    /// Send the load signal for the currently mounted model
    pub async fn finish_load(&self) {
        let pending = self.sender.lock().unwrap().clone();
        if let Some((sender, model_url)) = pending {
            sender.send(ViewerEvent::Loaded { model_url }).await;
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ViewerSurface for MockViewer {
    async fn mount(&self, source: &ModelSource, events: ViewerEventSender) -> Result<()> {
        if self.fail_mount {
            anyhow::bail!("renderer unavailable");
        }
        self.record(format!("mount {}", source.model_url));
        *self.sender.lock().unwrap() = Some((events, source.model_url.clone()));
        Ok(())
    }

    fn is_loaded(&self) -> bool {
        self.loaded_on_mount
    }

    fn reset_camera(&self, orbit: &str) {
        self.record(format!("reset {}", orbit));
    }

    fn request_fullscreen(&self) {
        self.record("fullscreen".to_string());
    }

    fn unmount(&self) {
        self.record("unmount".to_string());
    }

    fn name(&self) -> &str {
        "mock"
    }
}
