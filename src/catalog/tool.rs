use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog record describing one physical asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique tool identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Group label the tool is filed under
    pub group: String,

    /// Free-form technical description
    pub description: String,

    /// Poster image URL
    pub poster_url: String,

    /// Binary 3D model URL (`.glb`)
    pub model_url: String,
}

impl Tool {
    /// Build a tool from a draft, assigning a fresh identifier
    pub fn from_draft(draft: ToolDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            group: draft.group,
            description: draft.description,
            poster_url: draft.poster_url,
            model_url: draft.model_url,
        }
    }

    /// Whether `needle` matches this tool's id or display name
    pub fn matches(&self, needle: &str) -> bool {
        self.id == needle || self.name == needle
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id_short: String = self.id.chars().take(8).collect();
        write!(f, "{:<10} {:<20} {}", id_short, self.group, self.name)
    }
}

/// The add-form payload: a tool without an identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub poster_url: String,
    #[serde(default)]
    pub model_url: String,
}

impl ToolDraft {
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        poster_url: impl Into<String>,
        model_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            description: String::new(),
            poster_url: poster_url.into(),
            model_url: model_url.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Prefilled sample entry offered by the add form
    pub fn example() -> Self {
        Self::new(
            "Sample Tool - Spiral Drill Bit",
            "Drilling Tools",
            "https://images.unsplash.com/photo-1581092583537-20d51876f3e9?w=800&h=800&fit=crop",
            "https://modelviewer.dev/shared-assets/models/Astronaut.glb",
        )
        .with_description("Diameter: 215mm | Formation: medium-hard rock | PDC cutters")
    }

    /// Set a field by its form key. Returns false for unknown keys.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> bool {
        let slot = match key {
            "name" => &mut self.name,
            "group" => &mut self.group,
            "description" | "desc" => &mut self.description,
            "poster" | "poster_url" => &mut self.poster_url,
            "model" | "model_url" => &mut self.model_url,
            _ => return false,
        };
        *slot = value.into();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_draft_assigns_distinct_ids() {
        let draft = ToolDraft::example();
        let a = Tool::from_draft(draft.clone());
        let b = Tool::from_draft(draft);
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn set_field_accepts_aliases() {
        let mut draft = ToolDraft::default();
        assert!(draft.set_field("poster", "https://a/b.jpg"));
        assert!(draft.set_field("model_url", "https://a/b.glb"));
        assert!(draft.set_field("desc", "notes"));
        assert!(!draft.set_field("color", "red"));
        assert_eq!(draft.poster_url, "https://a/b.jpg");
        assert_eq!(draft.model_url, "https://a/b.glb");
        assert_eq!(draft.description, "notes");
    }

    #[test]
    fn matches_by_id_or_name() {
        let tool = Tool::from_draft(ToolDraft::example());
        assert!(tool.matches(&tool.id.clone()));
        assert!(tool.matches("Sample Tool - Spiral Drill Bit"));
        assert!(!tool.matches("Spiral"));
    }
}
