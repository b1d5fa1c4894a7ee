mod sample;
mod store;
mod tool;
mod validate;

pub use sample::sample_tools;
pub use store::{ALL_GROUPS, CatalogStore, DeleteOutcome, RenameOutcome, UNGROUPED};
pub use tool::{Tool, ToolDraft};
pub use validate::validate_draft;
