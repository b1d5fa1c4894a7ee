use anyhow::Result;
use async_trait::async_trait;

use super::ViewerEventSender;
use crate::catalog::Tool;
use crate::config::ViewerSettings;

/// What a surface is asked to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSource {
    /// Binary 3D asset URL
    pub model_url: String,
    /// Placeholder image shown until the model is ready
    pub poster_url: String,
    /// Camera and rotation settings
    pub settings: ViewerSettings,
}

impl ModelSource {
    pub fn for_tool(tool: &Tool, settings: &ViewerSettings) -> Self {
        Self {
            model_url: tool.model_url.clone(),
            poster_url: tool.poster_url.clone(),
            settings: settings.clone(),
        }
    }
}

/// An external, pre-built 3D rendering surface.
///
/// Rendering, camera control, geometry decoding, and auto-rotation all live
/// behind this trait. The catalog only hands over references and listens for
/// [`ViewerEvent::Loaded`](super::ViewerEvent::Loaded).
#[async_trait]
pub trait ViewerSurface: Send + Sync {
    /// Start displaying `source`; the load signal arrives later on `events`
    async fn mount(&self, source: &ModelSource, events: ViewerEventSender) -> Result<()>;

    /// Whether the currently mounted model has already finished loading
    fn is_loaded(&self) -> bool;

    /// Restore the camera to `orbit` and restart the turntable
    fn reset_camera(&self, orbit: &str);

    /// Ask the surface to go fullscreen
    fn request_fullscreen(&self);

    /// Stop displaying the current model
    fn unmount(&self);

    /// Get the surface name
    fn name(&self) -> &str;
}
