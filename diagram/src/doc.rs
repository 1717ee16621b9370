//! Document model: element records and the shared ordered collection.
//!
//! The collection mirrors the `elements` array of the collaborative document:
//! nodes and edges in insertion order, each a JSON object with an `id`, a
//! `type` tag, and a `data` bag of visual attributes. Fields this layer does
//! not interpret (position, edge endpoints, ...) ride along in `rest` so a
//! record survives a JSON round trip unchanged.
//!
//! All attribute writes go through [`Document::set_data`] or
//! [`Document::merge_patch`]. Each write bumps the revision and queues an
//! [`ElementUpdate`] for whatever transport relays changes to peers.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::patch::{AttributePatch, PatchOutcome};
use crate::selection::Selection;

/// Unique identifier for an element.
pub type ElementId = String;

/// Attribute bag stored under an element's `data` key.
pub type ElementData = Map<String, Value>;

/// Type tag of an element.
///
/// Only the two node kinds accept attribute patches. Every other tag is kept
/// verbatim so edges and unknown node kinds serialize back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementType {
    /// Shape node with fill color, fill style, and label.
    ShapeNode,
    /// Node exposing connection handles.
    HandleNode,
    /// Any other tag (edge types, the built-in `default` node, ...).
    Other(String),
}

impl ElementType {
    /// Whether attribute patches from the toolbar apply to this kind.
    #[must_use]
    pub fn is_attribute_target(&self) -> bool {
        matches!(self, Self::ShapeNode | Self::HandleNode)
    }

    /// The tag as stored in the document.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ShapeNode => "ShapeNode",
            Self::HandleNode => "HandleNode",
            Self::Other(tag) => tag.as_str(),
        }
    }
}

impl Default for ElementType {
    fn default() -> Self {
        Self::Other("default".to_owned())
    }
}

impl From<String> for ElementType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "ShapeNode" => Self::ShapeNode,
            "HandleNode" => Self::HandleNode,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for ElementType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_owned())
    }
}

impl From<ElementType> for String {
    fn from(kind: ElementType) -> Self {
        match kind {
            ElementType::Other(tag) => tag,
            other => other.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single element of the shared collection.
///
/// `type` and `data` stay `None` when the source record omits them, so an
/// untyped edge serializes back without either key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    /// Unique identifier within the collection.
    pub id: ElementId,
    /// Type tag; decides eligibility for attribute patches.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<ElementType>,
    /// Visual attributes (`fillColor`, `fillStyle`, `label`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ElementData>,
    /// Fields carried opaquely (position, source, target, ...).
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl ElementRecord {
    /// Build a typed record with an empty data bag and no extra fields.
    #[must_use]
    pub fn new(id: impl Into<ElementId>, element_type: impl Into<ElementType>) -> Self {
        Self {
            id: id.into(),
            element_type: Some(element_type.into()),
            data: Some(ElementData::new()),
            rest: Map::new(),
        }
    }

    /// Builder-style setter for the `data` bag.
    #[must_use]
    pub fn with_data(mut self, data: ElementData) -> Self {
        self.data = Some(data);
        self
    }

    /// Type tag as rendered; untyped records report `default`.
    #[must_use]
    pub fn type_tag(&self) -> &str {
        self.element_type.as_ref().map_or("default", ElementType::as_str)
    }

    /// Whether toolbar patches apply to this element.
    #[must_use]
    pub fn is_attribute_target(&self) -> bool {
        self.element_type
            .as_ref()
            .is_some_and(ElementType::is_attribute_target)
    }

    /// One value from the `data` bag.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.data.as_ref().and_then(|data| data.get(key))
    }

    /// Label text from `data.label`, if it is a string.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.attribute("label").and_then(Value::as_str)
    }
}

/// An attribute write queued for peers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementUpdate {
    /// Element whose `data` was replaced.
    pub id: ElementId,
    /// The full `data` bag after the write.
    pub data: ElementData,
}

/// Error returned when building or loading a document.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    /// Snapshot JSON could not be parsed or produced.
    #[error("invalid document json: {0}")]
    Json(#[from] serde_json::Error),
    /// Two elements share an identifier.
    #[error("duplicate element id: {0}")]
    DuplicateId(ElementId),
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    elements: Vec<ElementRecord>,
}

/// The shared ordered collection of elements.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<ElementRecord>,
    revision: u64,
    pending: Vec<ElementUpdate>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from records in collection order.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::DuplicateId`] if two records share an id.
    pub fn from_elements(elements: Vec<ElementRecord>) -> Result<Self, DocError> {
        let mut seen = HashSet::with_capacity(elements.len());
        for element in &elements {
            if !seen.insert(element.id.as_str()) {
                return Err(DocError::DuplicateId(element.id.clone()));
            }
        }
        Ok(Self {
            elements,
            revision: 0,
            pending: Vec::new(),
        })
    }

    /// Load a `{"elements": [...]}` snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::Json`] for malformed input and
    /// [`DocError::DuplicateId`] for repeated ids.
    pub fn from_json(json: &str) -> Result<Self, DocError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Self::from_elements(snapshot.elements)
    }

    /// Serialize the collection as a `{"elements": [...]}` snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, DocError> {
        let snapshot = Snapshot {
            elements: self.elements.clone(),
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    /// Append a record to the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::DuplicateId`] if the id is already present.
    pub fn push(&mut self, element: ElementRecord) -> Result<(), DocError> {
        if self.get(&element.id).is_some() {
            return Err(DocError::DuplicateId(element.id));
        }
        self.elements.push(element);
        self.revision += 1;
        Ok(())
    }

    /// Elements in collection order.
    #[must_use]
    pub fn elements(&self) -> &[ElementRecord] {
        &self.elements
    }

    /// Look up an element by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ElementRecord> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Read the `data` field of an element. `None` if the element is missing
    /// or carries no data bag.
    #[must_use]
    pub fn get_data(&self, id: &str) -> Option<&ElementData> {
        self.get(id).and_then(|e| e.data.as_ref())
    }

    /// Replace the `data` field of an element. Returns false if the element doesn't exist.
    pub fn set_data(&mut self, id: &str, data: ElementData) -> bool {
        let Some(element) = self.elements.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        self.pending.push(ElementUpdate {
            id: element.id.clone(),
            data: data.clone(),
        });
        element.data = Some(data);
        self.revision += 1;
        true
    }

    /// Shallow-merge `patch` into the `data` of every selected node.
    ///
    /// An element is written only when its id is in `selection` and its
    /// stored type tag is an attribute target. Everything else is left
    /// untouched. All writes of one call share a single revision bump.
    pub fn merge_patch(&mut self, selection: &Selection, patch: &AttributePatch) -> PatchOutcome {
        if selection.is_empty() {
            return PatchOutcome::EmptySelection;
        }

        let mut updated = Vec::new();
        for element in &mut self.elements {
            if !selection.contains(&element.id) || !element.is_attribute_target() {
                continue;
            }
            let data = element.data.get_or_insert_with(ElementData::new);
            patch.merge_into(data);
            self.pending.push(ElementUpdate {
                id: element.id.clone(),
                data: data.clone(),
            });
            updated.push(element.id.clone());
        }

        if updated.is_empty() {
            return PatchOutcome::NoEligibleTargets;
        }
        self.revision += 1;
        PatchOutcome::Applied { updated }
    }

    /// Take all updates queued since the last drain, oldest first.
    pub fn drain_updates(&mut self) -> Vec<ElementUpdate> {
        std::mem::take(&mut self.pending)
    }

    /// Counter bumped on every successful write.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of elements in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
