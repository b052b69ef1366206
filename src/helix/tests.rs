// src/helix/tests.rs
//! Integration tests for the Helix analysis pipeline.
//!
//! These tests drive the whole engine over small catalogs, not just
//! individual functions. Designed to catch regressions in the wiring
//! between indexing, resolution, validation and aggregation.

#[cfg(test)]
#[allow(clippy::indexing_slicing)] // Safe in tests with prior assertions
mod integration {
    use crate::config::{Layer, LayerMap, LayerSpec, LayoutOptions};
    use crate::diagram::memory::MemoryDiagramModel;
    use crate::helix::stats::LayerStatistics;
    use crate::helix::{analyze, assembler};
    use crate::model::{Catalog, Item, ItemId, ItemKind, TemplateField};

    fn folder(id: &str, name: &str, parent: Option<&str>) -> Item {
        Item {
            id: ItemId::from(id),
            name: name.to_string(),
            path: format!("/templates/{name}"),
            parent: parent.map(ItemId::from),
            kind: ItemKind::Folder,
        }
    }

    fn template(id: &str, name: &str, parent: &str, bases: &[&str]) -> Item {
        Item {
            id: ItemId::from(id),
            name: name.to_string(),
            path: format!("/templates/{name}"),
            parent: Some(ItemId::from(parent)),
            kind: ItemKind::Template {
                base_template_ids: bases.iter().map(|b| ItemId::from(*b)).collect(),
                fields: vec![TemplateField {
                    name: "Title".to_string(),
                    field_type: "Single-Line Text".to_string(),
                }],
            },
        }
    }

    fn spec(root: &str, modules: &[&str]) -> LayerSpec {
        LayerSpec {
            root: Some(ItemId::from(root)),
            modules: modules.iter().map(|m| ItemId::from(*m)).collect(),
        }
    }

    /// The worked example: A (Foundation/ModFoo), B (Feature/ModBar)
    /// inheriting A, C (Project/ModBaz) inheriting B, D (Feature/ModQux)
    /// inheriting C.
    fn helix_fixture() -> (Catalog, LayerMap) {
        let catalog = Catalog::from_items(vec![
            folder("foundation", "Foundation", None),
            folder("feature", "Feature", None),
            folder("project", "Project", None),
            folder("mod-foo", "ModFoo", Some("foundation")),
            folder("mod-bar", "ModBar", Some("feature")),
            folder("mod-baz", "ModBaz", Some("project")),
            folder("mod-qux", "ModQux", Some("feature")),
            template("a", "A", "mod-foo", &[]),
            template("b", "B", "mod-bar", &["a"]),
            template("c", "C", "mod-baz", &["b"]),
            template("d", "D", "mod-qux", &["c"]),
        ]);
        let layers = LayerMap {
            foundation: spec("foundation", &["mod-foo"]),
            feature: spec("feature", &["mod-bar", "mod-qux"]),
            project: spec("project", &["mod-baz"]),
        };
        (catalog, layers)
    }

    // ========================================================================
    // End-to-end verdicts: downward edges pass, Feature -> Project fails
    // and lands in the Feature layer's error list.
    // ========================================================================
    #[test]
    fn end_to_end_example_flags_the_upward_edge() {
        let (catalog, layers) = helix_fixture();
        let analysis = analyze(&catalog, &layers);

        assert_eq!(analysis.hierarchy.len(), 4);
        assert!(analysis.warnings.is_empty(), "{:?}", analysis.warnings);

        let deps_b = analysis.dependencies.dependencies_of(&ItemId::from("b"));
        assert_eq!(deps_b.len(), 1);
        assert_eq!(deps_b[0].target, ItemId::from("a"));
        assert!(deps_b[0].verdict.is_valid, "Feature -> Foundation is valid");

        let deps_c = analysis.dependencies.dependencies_of(&ItemId::from("c"));
        assert_eq!(deps_c.len(), 1);
        assert!(deps_c[0].verdict.is_valid, "Project -> Feature is valid");

        let deps_d = analysis.dependencies.dependencies_of(&ItemId::from("d"));
        assert_eq!(deps_d.len(), 1);
        assert!(!deps_d[0].verdict.is_valid, "Feature -> Project is invalid");

        assert!(analysis.validation.errors_detected);
        assert_eq!(analysis.validation.total(), 1);

        let feature_errors = &analysis.validation.by_layer[Layer::Feature.index()];
        assert_eq!(feature_errors.entries.len(), 1);
        let error = &feature_errors.entries[0];
        assert_eq!(error.module_name, "ModQux");
        assert_eq!(error.dependent_path, "/templates/D");
        assert_eq!(error.dependency_path, "/templates/C");
    }

    // ========================================================================
    // Dependents are the exact inverse of dependencies.
    // ========================================================================
    #[test]
    fn dependents_invert_dependencies() {
        let (catalog, layers) = helix_fixture();
        let analysis = analyze(&catalog, &layers);

        let ids = ["a", "b", "c", "d"].map(ItemId::from);
        for t in &ids {
            for u in &ids {
                let forward = analysis
                    .dependencies
                    .dependencies_of(u)
                    .iter()
                    .any(|dep| dep.target == *t);
                let backward = analysis
                    .dependencies
                    .dependents_of(t)
                    .iter()
                    .any(|dep| dep.source == *u);
                assert_eq!(forward, backward, "inversion mismatch for {u} -> {t}");
            }
        }

        // Every indexed template has an entry in both maps, even when empty.
        assert!(analysis
            .dependencies
            .dependencies_of(&ItemId::from("a"))
            .is_empty());
        assert!(analysis
            .dependencies
            .dependents_of(&ItemId::from("d"))
            .is_empty());
    }

    // ========================================================================
    // Dangling base references are dropped with a warning and contribute
    // to neither map.
    // ========================================================================
    #[test]
    fn dangling_base_reference_warns_and_drops() {
        let catalog = Catalog::from_items(vec![
            folder("feature", "Feature", None),
            folder("mod-bar", "ModBar", Some("feature")),
            template("b", "B", "mod-bar", &["ghost"]),
        ]);
        let layers = LayerMap {
            feature: spec("feature", &["mod-bar"]),
            ..LayerMap::default()
        };

        let analysis = analyze(&catalog, &layers);

        assert!(analysis
            .dependencies
            .dependencies_of(&ItemId::from("b"))
            .is_empty());
        assert_eq!(analysis.dependencies.edge_count(), 0);
        assert_eq!(analysis.warnings.len(), 1);
        assert!(analysis.warnings[0].contains("ghost"), "{}", analysis.warnings[0]);
        assert!(!analysis.validation.errors_detected);
    }

    // ========================================================================
    // Configuration gaps: unknown roots degrade to warnings, the run
    // continues with whatever resolves.
    // ========================================================================
    #[test]
    fn unknown_roots_are_skipped_not_fatal() {
        let catalog = Catalog::from_items(vec![
            folder("feature", "Feature", None),
            folder("mod-bar", "ModBar", Some("feature")),
            template("b", "B", "mod-bar", &[]),
        ]);
        let layers = LayerMap {
            foundation: spec("nope", &["mod-foo"]),
            feature: LayerSpec {
                root: Some(ItemId::from("feature")),
                modules: vec![ItemId::from("mod-bar"), ItemId::from("missing-module")],
            },
            ..LayerMap::default()
        };

        let analysis = analyze(&catalog, &layers);

        assert_eq!(analysis.hierarchy.layers().len(), 1);
        assert_eq!(analysis.hierarchy.len(), 1);
        assert_eq!(analysis.warnings.len(), 2);
        let helix = analysis.statistics.helix.expect("helix stats present");
        assert_eq!(helix.total_modules(), 1);
    }

    // ========================================================================
    // Statistics additivity: solution == sum(layers) == sum(modules).
    // ========================================================================
    #[test]
    fn statistics_add_up_across_levels() {
        let (catalog, layers) = helix_fixture();
        let analysis = analyze(&catalog, &layers);

        let helix = analysis.statistics.helix.expect("helix stats present");
        let by_modules: usize = helix
            .layers
            .iter()
            .flat_map(|layer| layer.modules.iter())
            .map(|module| module.total_dependencies)
            .sum();
        let by_layers: usize = helix
            .layers
            .iter()
            .map(LayerStatistics::total_module_dependencies)
            .sum();
        assert_eq!(helix.total_module_dependencies(), by_layers);
        assert_eq!(by_layers, by_modules);
        assert_eq!(
            helix.total_module_dependencies(),
            helix.total_module_dependents()
        );

        // Raw catalog counts ignore Helix membership.
        assert_eq!(analysis.statistics.total_templates, 4);
        assert_eq!(analysis.statistics.total_template_folders, 7);
        assert_eq!(analysis.statistics.total_template_fields, 4);
        assert_eq!(analysis.statistics.total_template_inheritance, 3);
    }

    // ========================================================================
    // Assembly: six view families, deduplicated per view.
    // ========================================================================
    #[test]
    fn assemble_builds_six_views_per_scope() {
        let (catalog, layers) = helix_fixture();
        let analysis = analyze(&catalog, &layers);

        let mut model = MemoryDiagramModel::new();
        let containers = assembler::assemble(
            &catalog,
            &analysis.hierarchy,
            &analysis.dependencies,
            &LayoutOptions::default(),
            &mut model,
        );

        // 4 modules x 4 module-scoped views + 3 layers x 2 layer views.
        assert_eq!(containers.len(), 22);
        assert_eq!(model.containers.len(), 22);

        // Every container was laid out exactly once.
        assert!(model.containers.iter().all(|c| c.layout.is_some()));

        let qux = model
            .container_named("ModQux Dependencies Diagram")
            .expect("module view exists");
        let edges = model.dependency_edges_in(qux);
        assert_eq!(edges.len(), 1, "one merged module-level edge");
        assert_eq!(
            edges[0].label,
            "{`/templates/D`} -> {`/templates/C`}"
        );
        assert!(edges[0].style.line_color.is_some(), "invalid edge is styled");
    }
}
