use super::*;

#[test]
fn starter_document_has_two_nodes_and_an_edge() {
    let doc = starter_document();
    assert_eq!(doc.len(), 3);
    let eligible = doc
        .elements()
        .iter()
        .filter(|e| e.is_attribute_target())
        .count();
    assert_eq!(eligible, 2);
    assert_eq!(doc.revision(), 0);
}

#[test]
fn starter_edge_keeps_endpoints() {
    let doc = starter_document();
    let edge = doc.get("edge-1").unwrap();
    assert_eq!(edge.rest.get("source"), Some(&json!("shape-1")));
    assert_eq!(edge.rest.get("target"), Some(&json!("handle-1")));
}

#[test]
fn sample_shape_ids_are_unique() {
    let a = sample_shape("A");
    let b = sample_shape("B");
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("shape-"));
    assert_eq!(a.label(), Some("A"));
}

#[test]
fn sample_shapes_can_be_pushed_into_starter() {
    let mut doc = starter_document();
    doc.push(sample_shape("new")).unwrap();
    assert_eq!(doc.len(), 4);
}

// =============================================================
// DocHandle
// =============================================================

fn shape_selection(ids: &[&str]) -> Selection {
    Selection::from_elements(
        ids.iter()
            .map(|id| diagram::selection::SelectedElement::new(*id, "ShapeNode")),
    )
}

#[test]
fn merge_patch_writes_selected_node_and_closes_submenu() {
    let handle = DocHandle::new(starter_document());
    let mut toolbar = AttributeToolbar::new();
    toolbar.open(diagram::toolbar::Submenu::Color);

    let outcome = handle.merge_patch(
        &mut toolbar,
        &shape_selection(&["shape-1"]),
        AttributePatch::fill_color(diagram::patch::FillColor::Red),
    );

    assert_eq!(outcome, Some(PatchOutcome::Applied { updated: vec!["shape-1".into()] }));
    assert_eq!(toolbar.menu(), diagram::toolbar::MenuState::Closed);
    assert_eq!(handle.revision(), 1);
    handle.with(|doc| {
        let shape = doc.get("shape-1").unwrap();
        assert_eq!(shape.attribute("fillColor"), Some(&json!("red")));
        assert_eq!(shape.attribute("fillStyle"), Some(&json!("filled")));
    });
}

#[test]
fn merge_patch_on_edge_only_selection_changes_nothing() {
    let handle = DocHandle::new(starter_document());
    let before = handle.with(|doc| doc.elements().to_vec());
    let mut toolbar = AttributeToolbar::new();
    toolbar.open(diagram::toolbar::Submenu::Text);

    let outcome = handle.merge_patch(&mut toolbar, &shape_selection(&["edge-1"]), AttributePatch::label("x"));

    assert_eq!(outcome, Some(PatchOutcome::NoEligibleTargets));
    assert!(!toolbar.is_open(diagram::toolbar::Submenu::Text));
    assert_eq!(handle.revision(), 0);
    handle.with(|doc| assert_eq!(doc.elements(), before.as_slice()));
}

#[test]
fn merge_patch_with_empty_selection_reports_and_closes() {
    let handle = DocHandle::new(starter_document());
    let mut toolbar = AttributeToolbar::new();
    toolbar.open(diagram::toolbar::Submenu::Fill);

    let outcome = handle.merge_patch(&mut toolbar, &Selection::new(), AttributePatch::label("x"));

    assert_eq!(outcome, Some(PatchOutcome::EmptySelection));
    assert_eq!(toolbar.menu(), diagram::toolbar::MenuState::Closed);
    assert!(handle.publish_pending().is_empty());
}

#[test]
fn publish_pending_drains_each_update_once() {
    let handle = DocHandle::new(starter_document());
    let mut toolbar = AttributeToolbar::new();
    handle.merge_patch(
        &mut toolbar,
        &shape_selection(&["shape-1", "handle-1"]),
        AttributePatch::label("both"),
    );

    let updates = handle.publish_pending();
    let ids: Vec<_> = updates.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, ["shape-1", "handle-1"]);
    assert_eq!(updates[0].data.get("label"), Some(&json!("both")));
    assert!(handle.publish_pending().is_empty());
}

#[test]
fn push_appends_and_rejects_duplicate() {
    let handle = DocHandle::new(starter_document());
    let shape = sample_shape("extra");
    assert!(matches!(handle.push(shape.clone()), Some(Ok(()))));
    assert!(matches!(handle.push(shape), Some(Err(DocError::DuplicateId(_)))));
    handle.with(|doc| assert_eq!(doc.len(), 4));
}
