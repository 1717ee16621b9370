//! Reactive handle around the shared element collection.
//!
//! DESIGN
//! ======
//! The collection itself is owned by `diagram::doc::Document`; this handle
//! only wraps it in a signal so views re-render after writes. Attribute
//! writes go through [`DocHandle::merge_patch`]; new elements through
//! [`DocHandle::push`]. There is no general-purpose mutable access.
//! Queued element updates are drained by [`DocHandle::publish_pending`], the
//! hook where a sync provider relays changes to peers.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use leptos::prelude::*;
use serde_json::json;

use diagram::doc::{DocError, Document, ElementData, ElementRecord, ElementUpdate};
use diagram::patch::{AttributePatch, PatchOutcome};
use diagram::selection::Selection;
use diagram::toolbar::AttributeToolbar;

/// Copyable handle to the shared document.
#[derive(Clone, Copy)]
pub struct DocHandle {
    doc: RwSignal<Document>,
}

impl DocHandle {
    pub fn new(doc: Document) -> Self {
        Self { doc: RwSignal::new(doc) }
    }

    /// Read the document, tracking it in the current reactive scope.
    pub fn with<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
        self.doc.with(f)
    }

    /// Close `toolbar`'s submenu, then merge `patch` into the selected nodes.
    ///
    /// The submenu is closed even when the handle has been disposed, in which
    /// case `None` is returned and nothing is written.
    pub fn merge_patch(
        &self,
        toolbar: &mut AttributeToolbar,
        selection: &Selection,
        patch: AttributePatch,
    ) -> Option<PatchOutcome> {
        toolbar.click_away();
        self.doc.try_update(|doc| toolbar.apply(doc, selection, patch))
    }

    /// Append a new element. `None` if the handle has been disposed.
    pub fn push(&self, record: ElementRecord) -> Option<Result<(), DocError>> {
        self.doc.try_update(|doc| doc.push(record))
    }

    /// Current revision, tracked.
    pub fn revision(&self) -> u64 {
        self.doc.with(Document::revision)
    }

    /// Drain queued element updates without notifying subscribers.
    pub fn publish_pending(&self) -> Vec<ElementUpdate> {
        let updates = self
            .doc
            .try_update_untracked(Document::drain_updates)
            .unwrap_or_default();
        for update in &updates {
            leptos::logging::log!("element update: id={} data={:?}", update.id, update.data);
        }
        updates
    }
}

/// Document shown when the editor opens without loaded content.
pub fn starter_document() -> Document {
    let elements = vec![
        node(
            "shape-1",
            "ShapeNode",
            json!({"label": "Start", "fillColor": "light", "fillStyle": "filled"}),
            (80.0, 60.0),
        ),
        node(
            "handle-1",
            "HandleNode",
            json!({"label": "Decision", "fillColor": "blue", "fillStyle": "outlined"}),
            (320.0, 60.0),
        ),
        ElementRecord {
            rest: json!({"source": "shape-1", "target": "handle-1"})
                .as_object()
                .cloned()
                .unwrap_or_default(),
            ..ElementRecord::new("edge-1", "smoothstep")
        },
    ];
    Document::from_elements(elements).unwrap_or_default()
}

/// A fresh shape node with a random id, for the sandbox page.
pub fn sample_shape(label: &str) -> ElementRecord {
    let id = format!("shape-{}", uuid::Uuid::new_v4());
    node(&id, "ShapeNode", json!({"label": label, "fillStyle": "filled"}), (0.0, 0.0))
}

fn node(id: &str, kind: &str, data: serde_json::Value, position: (f64, f64)) -> ElementRecord {
    let mut record = ElementRecord::new(id, kind)
        .with_data(data.as_object().cloned().unwrap_or_else(ElementData::new));
    record
        .rest
        .insert("position".to_owned(), json!({"x": position.0, "y": position.1}));
    record
}
