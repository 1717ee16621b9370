//! Document model and editor controls for the collaborative diagram editor.
//!
//! This crate holds everything the browser client needs that does not touch
//! the DOM: the shared element collection and its merge-patch primitive, the
//! selection set, the attribute toolbar's submenu state machine, and the
//! route table. The realtime sync layer lives outside this crate; it reads
//! pending updates from [`doc::Document::drain_updates`] and owns merging.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`doc`] | Element records, the ordered collection, and [`doc::ElementUpdate`] |
//! | [`patch`] | Attribute patches, palettes, and [`patch::PatchOutcome`] |
//! | [`selection`] | Selection set sourced from the canvas |
//! | [`toolbar`] | Attribute toolbar controller and submenu state |
//! | [`route`] | Path-to-page route table |

pub mod doc;
pub mod patch;
pub mod route;
pub mod selection;
pub mod toolbar;
