use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use super::{ModelSource, ViewerEvent, ViewerEventSender, ViewerSurface};
use crate::catalog::Tool;
use crate::config::ViewerSettings;
use crate::error::{CatalogError, Result};

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Resource links are cut to this many characters in the info panel
const LINK_PREVIEW_CHARS: usize = 50;

/// Full-screen presentation of one tool.
///
/// Owns the mount on the external surface for as long as it lives; dropping
/// the view unmounts the model.
pub struct DetailView {
    tool: Tool,
    surface: Arc<dyn ViewerSurface>,
    settings: ViewerSettings,
    events: mpsc::Receiver<ViewerEvent>,
    loading: bool,
    show_info: bool,
}

impl DetailView {
    /// Mount `tool` on `surface` and start in the loading state
    pub async fn open(
        tool: Tool,
        surface: Arc<dyn ViewerSurface>,
        settings: &ViewerSettings,
    ) -> Result<Self> {
        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let source = ModelSource::for_tool(&tool, settings);

        surface
            .mount(&source, ViewerEventSender::new(tx))
            .await
            .map_err(|e| CatalogError::Viewer(format!("{}: {}", surface.name(), e)))?;

        // The surface may have finished before we got to listen
        let loading = !surface.is_loaded();

        info!(tool_id = %tool.id, surface = surface.name(), loading, "opened detail view");

        Ok(Self {
            tool,
            surface,
            settings: settings.clone(),
            events: rx,
            loading,
            show_info: true,
        })
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_info_visible(&self) -> bool {
        self.show_info
    }

    /// Flip the info panel; returns the new visibility
    pub fn toggle_info(&mut self) -> bool {
        self.show_info = !self.show_info;
        self.show_info
    }

    pub fn reset_camera(&self) {
        self.surface.reset_camera(&self.settings.reset_camera_orbit);
    }

    pub fn request_fullscreen(&self) {
        self.surface.request_fullscreen();
    }

    /// Apply any events that have already arrived without waiting
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
        }
    }

    /// Wait for the surface's load signal.
    ///
    /// Returns immediately if the model is already loaded or the surface
    /// dropped its sender.
    pub async fn wait_until_loaded(&mut self) {
        while self.loading {
            match self.events.recv().await {
                Some(event) => self.apply(event),
                None => break,
            }
        }
    }

    /// Pick up edits made to the displayed tool in the catalog.
    ///
    /// The mounted model is left alone; only the panel text changes.
    pub fn refresh_tool(&mut self, tool: &Tool) {
        if tool.id == self.tool.id {
            self.tool.clone_from(tool);
        }
    }

    /// The side panel, or `None` while it is hidden
    pub fn info_panel(&self) -> Option<InfoPanel> {
        self.show_info.then(|| InfoPanel::for_tool(&self.tool))
    }

    /// Close the view and unmount the model
    pub fn close(self) {
        drop(self);
    }

    fn apply(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::Loaded { model_url } => {
                if model_url == self.tool.model_url {
                    debug!(tool_id = %self.tool.id, "model loaded");
                    self.loading = false;
                }
            }
        }
    }
}

impl Drop for DetailView {
    fn drop(&mut self) {
        self.surface.unmount();
        debug!(tool_id = %self.tool.id, "closed detail view");
    }
}

/// Text content of the detail view's info panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanel {
    pub name: String,
    pub group: String,
    pub description: String,
    pub poster_link: String,
    pub model_link: String,
}

impl InfoPanel {
    pub fn for_tool(tool: &Tool) -> Self {
        Self {
            name: tool.name.clone(),
            group: tool.group.clone(),
            description: tool.description.clone(),
            poster_link: link_preview(&tool.poster_url),
            model_link: link_preview(&tool.model_url),
        }
    }
}

impl std::fmt::Display for InfoPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name:        {}", self.name)?;
        writeln!(f, "Group:       {}", self.group)?;
        if !self.description.is_empty() {
            writeln!(f, "Details:     {}", self.description)?;
        }
        writeln!(f, "Poster:      {}", self.poster_link)?;
        write!(f, "Model:       {}", self.model_link)
    }
}

fn link_preview(url: &str) -> String {
    if url.chars().count() > LINK_PREVIEW_CHARS {
        url.chars().take(LINK_PREVIEW_CHARS).collect::<String>() + "..."
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ToolDraft;
    use crate::viewer::HeadlessViewer;

    fn tool() -> Tool {
        Tool::from_draft(ToolDraft::example())
    }

    #[test]
    fn link_preview_truncates_long_urls() {
        assert_eq!(link_preview("https://a/b.glb"), "https://a/b.glb");

        let long = format!("https://cdn.example.com/{}", "x".repeat(60));
        let preview = link_preview(&long);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), LINK_PREVIEW_CHARS + 3);
    }

    #[test]
    fn info_panel_lists_tool_fields() {
        let panel = InfoPanel::for_tool(&tool());
        let text = panel.to_string();
        assert!(text.contains("Sample Tool - Spiral Drill Bit"));
        assert!(text.contains("Drilling Tools"));
        assert!(text.contains("PDC cutters"));
    }

    #[tokio::test]
    async fn loading_clears_on_load_event() {
        let surface = Arc::new(HeadlessViewer::new());
        let mut view = DetailView::open(tool(), surface, &ViewerSettings::default())
            .await
            .unwrap();

        view.wait_until_loaded().await;
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn info_panel_toggles() {
        let surface = Arc::new(HeadlessViewer::new());
        let mut view = DetailView::open(tool(), surface, &ViewerSettings::default())
            .await
            .unwrap();

        assert!(view.is_info_visible());
        assert!(view.info_panel().is_some());
        assert!(!view.toggle_info());
        assert!(view.info_panel().is_none());
        assert!(view.toggle_info());
    }
}
