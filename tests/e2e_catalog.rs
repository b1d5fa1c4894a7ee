use frac_showcase::{
    ALL_GROUPS, CatalogError, CatalogStore, DeleteOutcome, RenameOutcome, Tool, ToolDraft,
    UNGROUPED,
};

fn draft(name: &str, group: &str) -> ToolDraft {
    ToolDraft::new(
        name,
        group,
        format!("https://cdn.example.com/{}.jpg", name),
        format!("https://cdn.example.com/{}.glb", name),
    )
}

fn downhole_and_pump() -> CatalogStore {
    let mut store = CatalogStore::new();
    for (name, group) in [
        ("plug", "Downhole"),
        ("pump", "Pump"),
        ("perforator", "Downhole"),
        ("blender", "Pump"),
        ("cluster", "Downhole"),
    ] {
        store.add_tool(draft(name, group)).expect("add tool");
    }
    store
}

fn ids(tools: &[&Tool]) -> Vec<String> {
    tools.iter().map(|t| t.id.clone()).collect()
}

#[test]
fn test_select_then_rename_keeps_filtered_view() {
    let mut store = downhole_and_pump();

    store.select_group("Pump");
    let before = ids(&store.filtered_tools());
    assert_eq!(before.len(), 2);
    assert!(store.filtered_tools().iter().all(|t| t.group == "Pump"));

    let outcome = store
        .rename_group("Pump", "PumpParts")
        .expect("rename should succeed");
    assert_eq!(outcome, RenameOutcome::Renamed { moved: 2 });
    assert_eq!(store.selected_group(), "PumpParts");

    let after = store.filtered_tools();
    assert_eq!(ids(&after), before);
    assert!(after.iter().all(|t| t.group == "PumpParts"));
}

#[test]
fn test_rename_touches_only_the_renamed_group() {
    let mut store = downhole_and_pump();
    let downhole_before: Vec<Tool> = store
        .tools()
        .iter()
        .filter(|t| t.group == "Downhole")
        .cloned()
        .collect();

    store.rename_group("Pump", "PumpParts").expect("rename");

    let downhole_after: Vec<Tool> = store
        .tools()
        .iter()
        .filter(|t| t.group == "Downhole")
        .cloned()
        .collect();
    assert_eq!(downhole_before, downhole_after);
    assert!(!store.tools().iter().any(|t| t.group == "Pump"));
}

#[test]
fn test_rename_conflict_leaves_collection_unchanged() {
    let mut store = downhole_and_pump();
    store.select_group("Pump");
    let before = store.tools().to_vec();

    let err = store.rename_group("Pump", "Downhole").unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateGroup(_)));
    assert_eq!(store.tools(), before.as_slice());
    assert_eq!(store.selected_group(), "Pump");
}

#[test]
fn test_delete_after_confirmation() {
    let mut store = downhole_and_pump();
    store.select_group("Downhole");

    let outcome = store.delete_group("Downhole", |_| true);
    assert_eq!(outcome, DeleteOutcome::Deleted { moved: 3 });
    assert_eq!(store.selected_group(), ALL_GROUPS);
    assert_eq!(
        store.tools().iter().filter(|t| t.group == UNGROUPED).count(),
        3
    );
    assert!(!store.list_groups().contains(&"Downhole".to_string()));
}

#[test]
fn test_delete_all_is_a_noop() {
    let mut store = downhole_and_pump();
    let before = store.tools().to_vec();

    assert_eq!(
        store.delete_group(ALL_GROUPS, |_| true),
        DeleteOutcome::Ignored
    );
    assert_eq!(store.tools(), before.as_slice());
}

#[test]
fn test_list_groups_has_sentinel_and_no_duplicates() {
    let mut store = downhole_and_pump();
    store.add_tool(draft("extra", "Pump")).expect("add");
    store.add_tool(draft("new", "Wireline")).expect("add");

    let groups = store.list_groups();
    assert_eq!(groups[0], ALL_GROUPS);
    let mut deduped = groups.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), groups.len());
    assert_eq!(groups, vec!["All", "Downhole", "Pump", "Wireline"]);
}

#[test]
fn test_all_selection_returns_full_collection_in_order() {
    let store = downhole_and_pump();
    let all: Vec<Tool> = store.filtered_tools().into_iter().cloned().collect();
    assert_eq!(all, store.tools());
}

#[test]
fn test_invalid_drafts_never_mutate() {
    let mut store = downhole_and_pump();
    let before = store.tools().to_vec();

    let empty_fields = [
        ToolDraft {
            name: String::new(),
            ..draft("x", "G")
        },
        ToolDraft {
            group: String::new(),
            ..draft("x", "G")
        },
        ToolDraft {
            poster_url: String::new(),
            ..draft("x", "G")
        },
        ToolDraft {
            model_url: String::new(),
            ..draft("x", "G")
        },
    ];
    for d in empty_fields {
        assert!(matches!(
            store.add_tool(d),
            Err(CatalogError::MissingFields(_))
        ));
    }

    let bad_urls = [
        ToolDraft {
            poster_url: "poster.jpg".into(),
            ..draft("x", "G")
        },
        ToolDraft {
            model_url: "http//broken".into(),
            ..draft("x", "G")
        },
    ];
    for d in bad_urls {
        assert!(matches!(
            store.add_tool(d),
            Err(CatalogError::InvalidUrls(_))
        ));
    }

    assert_eq!(store.tools(), before.as_slice());
}

#[test]
fn test_rapid_additions_get_unique_ids() {
    let mut store = CatalogStore::new();
    for _ in 0..200 {
        store.add_tool(ToolDraft::example()).expect("add");
    }
    let mut ids: Vec<&str> = store.tools().iter().map(|t| t.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 200);
}

#[test]
fn test_sample_catalog() {
    let store = CatalogStore::with_sample_data();
    assert_eq!(store.len(), 5);
    assert_eq!(
        store.existing_groups(),
        vec!["Downhole Tools", "Frac Pump Parts"]
    );
    assert!(store.find_tool("3").is_some());
    assert!(store.find_tool("Frac Fluid Blender").is_some());
}
