use tracing::{debug, info};

use super::validate::validate_draft;
use super::{Tool, ToolDraft};
use crate::error::{CatalogError, Result};

/// Reserved pseudo-group meaning "no filter"
pub const ALL_GROUPS: &str = "All";

/// Group that receives the tools of a deleted group
pub const UNGROUPED: &str = "Ungrouped";

/// Result of a group rename request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Tools were moved to the new name
    Renamed { moved: usize },
    /// Empty target, same name, or the reserved pseudo-group
    Unchanged,
}

/// Result of a group delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Tools were moved to the fallback group
    Deleted { moved: usize },
    /// The confirmation was declined
    Cancelled,
    /// The reserved pseudo-group
    Ignored,
}

/// In-memory catalog state: the tool list plus the current selection
#[derive(Debug, Clone)]
pub struct CatalogStore {
    tools: Vec<Tool>,
    selected_group: String,
    selected_tool: Option<Tool>,
}

impl CatalogStore {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::with_tools(Vec::new())
    }

    /// Create a catalog over an existing collection
    pub fn with_tools(tools: Vec<Tool>) -> Self {
        Self {
            tools,
            selected_group: ALL_GROUPS.to_string(),
            selected_tool: None,
        }
    }

    /// Create a catalog seeded with the bundled sample tools
    pub fn with_sample_data() -> Self {
        Self::with_tools(super::sample::sample_tools())
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn selected_group(&self) -> &str {
        &self.selected_group
    }

    pub fn selected_tool(&self) -> Option<&Tool> {
        self.selected_tool.as_ref()
    }

    /// The "All" sentinel followed by each distinct group in first-seen order
    pub fn list_groups(&self) -> Vec<String> {
        let mut groups = vec![ALL_GROUPS.to_string()];
        for tool in &self.tools {
            if !groups.iter().any(|g| g == &tool.group) {
                groups.push(tool.group.clone());
            }
        }
        groups
    }

    /// Real groups only, used as add-form suggestions
    pub fn existing_groups(&self) -> Vec<String> {
        self.list_groups().into_iter().skip(1).collect()
    }

    /// Tools visible under the current group selection, in insertion order
    pub fn filtered_tools(&self) -> Vec<&Tool> {
        if self.selected_group == ALL_GROUPS {
            self.tools.iter().collect()
        } else {
            self.tools
                .iter()
                .filter(|t| t.group == self.selected_group)
                .collect()
        }
    }

    /// Number of tools a group selection would show
    pub fn group_count(&self, group: &str) -> usize {
        if group == ALL_GROUPS {
            self.tools.len()
        } else {
            self.tools.iter().filter(|t| t.group == group).count()
        }
    }

    /// Look up a tool by id or exact display name
    pub fn find_tool(&self, needle: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.matches(needle))
    }

    /// Validate a draft and append it as a new tool
    pub fn add_tool(&mut self, draft: ToolDraft) -> Result<Tool> {
        validate_draft(&draft)?;

        let tool = Tool::from_draft(ToolDraft {
            name: draft.name.trim().to_string(),
            group: draft.group.trim().to_string(),
            description: draft.description,
            poster_url: draft.poster_url.trim().to_string(),
            model_url: draft.model_url.trim().to_string(),
        });
        self.tools.push(tool.clone());

        info!(tool_id = %tool.id, name = %tool.name, group = %tool.group, "added tool");
        Ok(tool)
    }

    /// Rename a group, moving every tool in it and keeping the filter on it
    pub fn rename_group(&mut self, old_name: &str, new_name: &str) -> Result<RenameOutcome> {
        let new_name = new_name.trim();
        if new_name.is_empty() || new_name == old_name || old_name == ALL_GROUPS {
            debug!(old_name, new_name, "group rename ignored");
            return Ok(RenameOutcome::Unchanged);
        }

        if self.list_groups().iter().any(|g| g == new_name) {
            return Err(CatalogError::DuplicateGroup(new_name.to_string()));
        }

        let moved = self.regroup(old_name, new_name);
        if self.selected_group == old_name {
            self.selected_group = new_name.to_string();
        }

        info!(old_name, new_name, moved, "renamed group");
        Ok(RenameOutcome::Renamed { moved })
    }

    /// Delete a group after confirmation, moving its tools to [`UNGROUPED`].
    ///
    /// `confirm` receives the prompt text and returns true to proceed. It is
    /// not called for [`ALL_GROUPS`]. An existing user group named
    /// [`UNGROUPED`] is merged into, not duplicated, so deleting that group
    /// leaves its tools where they are.
    pub fn delete_group(
        &mut self,
        name: &str,
        confirm: impl FnOnce(&str) -> bool,
    ) -> DeleteOutcome {
        if name == ALL_GROUPS {
            debug!(group = name, "group delete ignored");
            return DeleteOutcome::Ignored;
        }

        let prompt = format!(
            "Delete group \"{}\"? All tools in it will move to \"{}\".",
            name, UNGROUPED
        );
        if !confirm(&prompt) {
            debug!(group = name, "group delete cancelled");
            return DeleteOutcome::Cancelled;
        }

        let moved = self.regroup(name, UNGROUPED);
        if self.selected_group == name {
            self.selected_group = ALL_GROUPS.to_string();
        }

        info!(group = name, moved, "deleted group");
        DeleteOutcome::Deleted { moved }
    }

    pub fn select_group(&mut self, name: impl Into<String>) {
        self.selected_group = name.into();
    }

    pub fn select_tool(&mut self, tool: Option<Tool>) {
        self.selected_tool = tool;
    }

    fn regroup(&mut self, from: &str, to: &str) -> usize {
        let mut moved = 0;
        for tool in self.tools.iter_mut().filter(|t| t.group == from) {
            tool.group = to.to_string();
            moved += 1;
        }

        // Keep the open detail view in step with the collection
        if let Some(selected) = self.selected_tool.as_mut() {
            if selected.group == from {
                selected.group = to.to_string();
            }
        }

        moved
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
