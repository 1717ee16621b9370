//! Pointer-click to selection mapping for the editor canvas.

#[cfg(test)]
#[path = "selection_click_test.rs"]
mod selection_click_test;

use diagram::doc::ElementRecord;
use diagram::selection::{SelectedElement, Selection};

/// Update `selection` for a click on `record`.
///
/// A plain click selects only the clicked element; a shift-click toggles it
/// in or out of the current selection.
pub fn apply_click(selection: &mut Selection, record: &ElementRecord, additive: bool) {
    let item = SelectedElement::from(record);
    if additive {
        selection.toggle(item);
    } else {
        selection.select_only(item);
    }
}
