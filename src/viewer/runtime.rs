use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};
use url::Url;

use crate::error::{CatalogError, Result};

static ACTIVE: AtomicBool = AtomicBool::new(false);

/// Process-wide handle on the external viewer runtime.
///
/// Created once at startup and torn down when dropped. Only one runtime may
/// be live at a time.
#[derive(Debug)]
pub struct ViewerRuntime {
    url: Url,
}

impl ViewerRuntime {
    /// Load the viewer runtime from `runtime_url`
    pub fn init(runtime_url: &str) -> Result<Self> {
        let url = Url::parse(runtime_url)
            .map_err(|e| CatalogError::Viewer(format!("invalid runtime URL: {}", e)))?;

        if ACTIVE.swap(true, Ordering::SeqCst) {
            return Err(CatalogError::Viewer(
                "viewer runtime already initialized".to_string(),
            ));
        }

        info!(runtime = %url, "viewer runtime loaded");
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns true while a runtime guard is alive
    pub fn is_active() -> bool {
        ACTIVE.load(Ordering::SeqCst)
    }
}

impl Drop for ViewerRuntime {
    fn drop(&mut self) {
        ACTIVE.store(false, Ordering::SeqCst);
        debug!(runtime = %self.url, "viewer runtime unloaded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the guard is process-wide state.
    #[test]
    fn runtime_lifecycle() {
        assert!(matches!(
            ViewerRuntime::init("not a url"),
            Err(CatalogError::Viewer(_))
        ));

        let runtime = ViewerRuntime::init("https://cdn.example.com/viewer.js").unwrap();
        assert!(ViewerRuntime::is_active());
        assert_eq!(runtime.url().host_str(), Some("cdn.example.com"));
        assert!(ViewerRuntime::init("https://cdn.example.com/viewer.js").is_err());

        drop(runtime);
        assert!(!ViewerRuntime::is_active());

        let again = ViewerRuntime::init("https://cdn.example.com/viewer.js");
        assert!(again.is_ok());
    }
}
