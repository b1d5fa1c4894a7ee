mod project;
mod viewer;

pub use project::{CONFIG_ENV_VAR, CatalogSettings, PROJECT_CONFIG_FILE, ShowcaseConfig};
pub use viewer::ViewerSettings;
