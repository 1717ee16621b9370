//! Selection set sourced from the editor canvas.
//!
//! Entries are ephemeral: the canvas rebuilds them on every selection change.
//! The type tag carried here is informational only; patch eligibility is read
//! from the document's own copy of the tag.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::doc::{Document, ElementId, ElementRecord, ElementType};

/// Reference to one selected element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedElement {
    pub id: ElementId,
    pub element_type: ElementType,
}

impl SelectedElement {
    #[must_use]
    pub fn new(id: impl Into<ElementId>, element_type: impl Into<ElementType>) -> Self {
        Self {
            id: id.into(),
            element_type: element_type.into(),
        }
    }
}

impl From<&ElementRecord> for SelectedElement {
    fn from(record: &ElementRecord) -> Self {
        Self {
            id: record.id.clone(),
            element_type: record.element_type.clone().unwrap_or_default(),
        }
    }
}

/// Ordered set of selected elements, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<SelectedElement>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection, keeping the first entry for each repeated id.
    #[must_use]
    pub fn from_elements(items: impl IntoIterator<Item = SelectedElement>) -> Self {
        let mut selection = Self::new();
        for item in items {
            selection.insert(item);
        }
        selection
    }

    /// Add an element unless its id is already selected. Returns true if added.
    pub fn insert(&mut self, item: SelectedElement) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Replace the selection with a single element.
    pub fn select_only(&mut self, item: SelectedElement) {
        self.items.clear();
        self.items.push(item);
    }

    /// Add the element if absent, remove it if present (shift-click).
    pub fn toggle(&mut self, item: SelectedElement) {
        if let Some(pos) = self.items.iter().position(|s| s.id == item.id) {
            self.items.remove(pos);
        } else {
            self.items.push(item);
        }
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drop entries whose id no longer exists in `doc`.
    pub fn retain_existing(&mut self, doc: &Document) {
        self.items.retain(|s| doc.get(&s.id).is_some());
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|s| s.id == id)
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|s| s.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedElement> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
