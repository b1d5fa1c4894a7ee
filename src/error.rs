#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Each unparseable reference as `(field, parser message)`
    #[error("invalid URL in {}", describe_invalid_urls(.0))]
    InvalidUrls(Vec<(&'static str, String)>),

    #[error("group already exists: {0}")]
    DuplicateGroup(String),

    #[error("tool not found: {0}")]
    ToolNotFound(String),

    #[error("viewer error: {0}")]
    Viewer(String),

    #[error("configuration error: {0}")]
    Config(String),
}

fn describe_invalid_urls(issues: &[(&'static str, String)]) -> String {
    issues
        .iter()
        .map(|(field, reason)| format!("{}: {}", field, reason))
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
