pub mod catalog;
pub mod config;
pub mod error;
pub mod shell;
pub mod viewer;

pub use catalog::{
    ALL_GROUPS, CatalogStore, DeleteOutcome, RenameOutcome, Tool, ToolDraft, UNGROUPED,
};
pub use config::{CatalogSettings, ShowcaseConfig, ViewerSettings};
pub use error::CatalogError;
pub use shell::{Shell, ShellCommand};
pub use viewer::{
    DetailView, HeadlessViewer, InfoPanel, ModelSource, ViewerEvent, ViewerEventSender,
    ViewerRuntime, ViewerSurface,
};
