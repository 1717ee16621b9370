use super::*;

fn record(id: &str) -> ElementRecord {
    ElementRecord::new(id, "ShapeNode")
}

#[test]
fn plain_click_replaces_selection() {
    let mut selection = Selection::new();
    apply_click(&mut selection, &record("a"), false);
    apply_click(&mut selection, &record("b"), false);
    assert_eq!(selection.ids().collect::<Vec<_>>(), ["b"]);
}

#[test]
fn shift_click_toggles_membership() {
    let mut selection = Selection::new();
    apply_click(&mut selection, &record("a"), false);
    apply_click(&mut selection, &record("b"), true);
    assert_eq!(selection.ids().collect::<Vec<_>>(), ["a", "b"]);
    apply_click(&mut selection, &record("a"), true);
    assert_eq!(selection.ids().collect::<Vec<_>>(), ["b"]);
}

#[test]
fn click_records_type_from_document() {
    let mut selection = Selection::new();
    apply_click(&mut selection, &ElementRecord::new("e", "smoothstep"), false);
    let first = selection.iter().next().unwrap();
    assert_eq!(first.element_type.as_str(), "smoothstep");
}
