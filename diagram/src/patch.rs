//! Attribute patches and the outcome of applying one.
//!
//! A patch is a flat JSON object merged into an element's `data` bag with
//! spread semantics: patch keys win, other keys survive, nested values are
//! replaced whole. The palettes below are the values the toolbar offers.

#[cfg(test)]
#[path = "patch_test.rs"]
mod patch_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::doc::{ElementData, ElementId};

/// Node fill colors offered by the color submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillColor {
    Dark,
    Light,
    Red,
    Green,
    Blue,
    Purple,
}

impl FillColor {
    /// Every palette entry in display order.
    pub const ALL: [Self; 6] = [
        Self::Dark,
        Self::Light,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Purple,
    ];

    /// Value stored under `data.fillColor`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }

    /// CSS class used for the swatch. Purple renders with the `darkblue` swatch.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Purple => "darkblue",
            other => other.as_str(),
        }
    }
}

/// Node fill styles offered by the fill submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStyle {
    Dashed,
    Filled,
    Outlined,
}

impl FillStyle {
    /// Every fill style in display order.
    pub const ALL: [Self; 3] = [Self::Dashed, Self::Filled, Self::Outlined];

    /// Value stored under `data.fillStyle`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashed => "dashed",
            Self::Filled => "filled",
            Self::Outlined => "outlined",
        }
    }

    /// Tooltip shown next to the button.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashed => "Dotted Edge",
            Self::Filled => "Filled",
            Self::Outlined => "Outlined",
        }
    }
}

/// A partial `data` bag to merge into selected elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributePatch(Map<String, Value>);

impl AttributePatch {
    /// Wrap an arbitrary attribute map.
    #[must_use]
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// `{fillColor: <color>}`
    #[must_use]
    pub fn fill_color(color: FillColor) -> Self {
        Self::single("fillColor", Value::String(color.as_str().to_owned()))
    }

    /// `{fillStyle: <style>}`
    #[must_use]
    pub fn fill_style(style: FillStyle) -> Self {
        Self::single("fillStyle", Value::String(style.as_str().to_owned()))
    }

    /// `{label: <text>}`
    #[must_use]
    pub fn label(text: impl Into<String>) -> Self {
        Self::single("label", Value::String(text.into()))
    }

    fn single(key: &str, value: Value) -> Self {
        let mut map = Map::new();
        map.insert(key.to_owned(), value);
        Self(map)
    }

    /// Add or overwrite one key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Returns `true` if the patch carries no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The patch's keys and values.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Shallow merge: every patch key overwrites, `null` included.
    pub fn merge_into(&self, data: &mut ElementData) {
        for (key, value) in &self.0 {
            data.insert(key.clone(), value.clone());
        }
    }

    /// Return `{...data, ...self}` without touching `data`.
    #[must_use]
    pub fn merged(&self, data: &ElementData) -> ElementData {
        let mut out = data.clone();
        self.merge_into(&mut out);
        out
    }
}

/// Result of applying a patch to the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Nothing was selected; the collection was not touched.
    EmptySelection,
    /// Selection was non-empty but held no node of an eligible kind.
    NoEligibleTargets,
    /// The listed elements were rewritten, in collection order.
    Applied { updated: Vec<ElementId> },
}

impl PatchOutcome {
    /// Whether any element was written.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// Ids written by this apply; empty for the no-op outcomes.
    #[must_use]
    pub fn updated(&self) -> &[ElementId] {
        match self {
            Self::Applied { updated } => updated.as_slice(),
            Self::EmptySelection | Self::NoEligibleTargets => &[],
        }
    }
}
