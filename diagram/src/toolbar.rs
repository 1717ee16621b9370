//! Attribute toolbar controller.
//!
//! DESIGN
//! ======
//! The toolbar is a column of submenu buttons (color, fill style, label).
//! At most one submenu is open at a time. Every user action resolves to an
//! [`AttributePatch`] that is merged into the selected nodes; the submenu
//! closes after each apply whether or not anything was written.
//!
//! Submenu transitions:
//!
//! ```text
//! Closed | Open(_) --open(m)--> Open(m)
//! Closed | Open(_) --click_away / apply--> Closed
//! ```

#[cfg(test)]
#[path = "toolbar_test.rs"]
mod toolbar_test;

use crate::doc::Document;
use crate::patch::{AttributePatch, FillColor, FillStyle, PatchOutcome};
use crate::selection::Selection;

/// Key that submits the label field.
pub const SUBMIT_KEY: &str = "Enter";

/// Submenus reachable from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submenu {
    Color,
    Fill,
    Text,
}

impl Submenu {
    /// Buttons in display order.
    pub const ALL: [Self; 3] = [Self::Color, Self::Fill, Self::Text];

    /// Tooltip on the toolbar button that opens this submenu.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Color => "Change Color",
            Self::Fill => "Fill Style",
            Self::Text => "Change Text",
        }
    }

    /// DOM id of the submenu panel.
    #[must_use]
    pub fn panel_id(self) -> &'static str {
        match self {
            Self::Color => "colorPanel",
            Self::Fill => "fillPanel",
            Self::Text => "textPanel",
        }
    }
}

/// Which submenu, if any, is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open(Submenu),
}

/// Toolbar state plus the actions that drive it.
#[derive(Debug, Clone, Default)]
pub struct AttributeToolbar {
    menu: MenuState,
}

impl AttributeToolbar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current submenu state.
    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Whether `submenu` is the one currently open.
    #[must_use]
    pub fn is_open(&self, submenu: Submenu) -> bool {
        self.menu == MenuState::Open(submenu)
    }

    /// Show `submenu`, replacing whichever was open.
    pub fn open(&mut self, submenu: Submenu) {
        self.menu = MenuState::Open(submenu);
    }

    /// Close the open submenu without touching the document.
    pub fn click_away(&mut self) {
        self.menu = MenuState::Closed;
    }

    /// Close the submenu, then merge `patch` into the selected nodes of `doc`.
    pub fn apply(&mut self, doc: &mut Document, selection: &Selection, patch: AttributePatch) -> PatchOutcome {
        self.menu = MenuState::Closed;
        let outcome = doc.merge_patch(selection, &patch);
        match &outcome {
            PatchOutcome::EmptySelection => {
                log::info!("attribute patch skipped: selection is empty");
            }
            PatchOutcome::NoEligibleTargets => {
                log::info!(
                    "attribute patch skipped: none of {} selected element(s) is a shape or handle node",
                    selection.len()
                );
            }
            PatchOutcome::Applied { updated } => {
                log::debug!("attribute patch applied to {} element(s): {:?}", updated.len(), patch.as_map());
            }
        }
        outcome
    }

    /// Apply `{fillColor: color}`.
    pub fn choose_color(&mut self, doc: &mut Document, selection: &Selection, color: FillColor) -> PatchOutcome {
        self.apply(doc, selection, AttributePatch::fill_color(color))
    }

    /// Apply `{fillStyle: style}`.
    pub fn choose_fill_style(&mut self, doc: &mut Document, selection: &Selection, style: FillStyle) -> PatchOutcome {
        self.apply(doc, selection, AttributePatch::fill_style(style))
    }

    /// Apply `{label: text}`.
    pub fn submit_label(&mut self, doc: &mut Document, selection: &Selection, text: &str) -> PatchOutcome {
        self.apply(doc, selection, AttributePatch::label(text))
    }

    /// Handle a key press in the label field. Only [`SUBMIT_KEY`] submits.
    pub fn on_label_key(
        &mut self,
        doc: &mut Document,
        selection: &Selection,
        key: &str,
        text: &str,
    ) -> Option<PatchOutcome> {
        if key != SUBMIT_KEY {
            return None;
        }
        Some(self.submit_label(doc, selection, text))
    }
}
