// tests/unit_validator.rs
//! Rule-table coverage for the layer validator.

use helixdoc_core::config::Layer;
use helixdoc_core::helix::hierarchy::HierarchyEntry;
use helixdoc_core::helix::validator::classify;
use helixdoc_core::model::ItemId;

fn entry(template: &str, module: &str, layer: Layer) -> HierarchyEntry {
    HierarchyEntry {
        template_id: ItemId::from(template),
        module_id: ItemId::from(module),
        layer,
    }
}

#[test]
fn test_same_module_is_always_valid() {
    let source = entry("t1", "mod-a", Layer::Feature);
    let target = entry("t2", "mod-a", Layer::Feature);
    let verdict = classify(&source, &target);
    assert!(verdict.is_valid);
    assert!(verdict.message.is_none());
}

#[test]
fn test_foundation_lateral_is_valid() {
    let source = entry("t1", "mod-a", Layer::Foundation);
    let target = entry("t2", "mod-b", Layer::Foundation);
    assert!(classify(&source, &target).is_valid);
}

#[test]
fn test_feature_lateral_is_invalid() {
    let source = entry("t1", "mod-a", Layer::Feature);
    let target = entry("t2", "mod-b", Layer::Feature);
    let verdict = classify(&source, &target);
    assert!(!verdict.is_valid);
    assert!(
        verdict.message.as_deref().unwrap_or("").contains("Feature"),
        "message names the offending layer"
    );
}

#[test]
fn test_project_lateral_is_invalid() {
    let source = entry("t1", "mod-a", Layer::Project);
    let target = entry("t2", "mod-b", Layer::Project);
    let verdict = classify(&source, &target);
    assert!(!verdict.is_valid);
    assert_eq!(
        verdict.message.as_deref(),
        Some("Project cannot depend on another Project module")
    );
}

#[test]
fn test_upward_edges_are_invalid() {
    let cases = [
        (Layer::Foundation, Layer::Feature),
        (Layer::Foundation, Layer::Project),
        (Layer::Feature, Layer::Project),
    ];
    for (from, to) in cases {
        let verdict = classify(&entry("t1", "mod-a", from), &entry("t2", "mod-b", to));
        assert!(!verdict.is_valid, "{from:?} -> {to:?} must be invalid");
        assert!(verdict.message.is_some());
    }
}

#[test]
fn test_downward_edges_are_valid() {
    let cases = [
        (Layer::Feature, Layer::Foundation),
        (Layer::Project, Layer::Foundation),
        (Layer::Project, Layer::Feature),
    ];
    for (from, to) in cases {
        let verdict = classify(&entry("t1", "mod-a", from), &entry("t2", "mod-b", to));
        assert!(verdict.is_valid, "{from:?} -> {to:?} must be valid");
        assert!(verdict.message.is_none());
    }
}

#[test]
fn test_classification_is_idempotent() {
    let source = entry("t1", "mod-a", Layer::Feature);
    let target = entry("t2", "mod-b", Layer::Project);
    assert_eq!(classify(&source, &target), classify(&source, &target));
}
