use tracing::warn;
use url::Url;

use super::ToolDraft;
use crate::error::{CatalogError, Result};

/// Checks an add-form draft before it reaches the store.
///
/// All required fields are checked together so the submitter gets a single
/// message naming every missing field. URL parsing runs only once every
/// required field is present, and likewise reports every bad reference.
pub fn validate_draft(draft: &ToolDraft) -> Result<()> {
    let mut missing = Vec::new();
    if draft.name.trim().is_empty() {
        missing.push("name");
    }
    if draft.group.trim().is_empty() {
        missing.push("group");
    }
    if draft.poster_url.trim().is_empty() {
        missing.push("poster_url");
    }
    if draft.model_url.trim().is_empty() {
        missing.push("model_url");
    }
    if !missing.is_empty() {
        return Err(CatalogError::MissingFields(missing));
    }

    let mut invalid = Vec::new();
    if let Err(e) = Url::parse(draft.poster_url.trim()) {
        invalid.push(("poster_url", e.to_string()));
    }
    match Url::parse(draft.model_url.trim()) {
        Ok(model) if !model.path().to_ascii_lowercase().ends_with(".glb") => {
            warn!(model_url = %draft.model_url, "model reference is not a .glb asset");
        }
        Ok(_) => {}
        Err(e) => invalid.push(("model_url", e.to_string())),
    }
    if !invalid.is_empty() {
        return Err(CatalogError::InvalidUrls(invalid));
    }

    Ok(())
}
