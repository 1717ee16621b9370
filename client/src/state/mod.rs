//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared state is provided through Leptos context: the document handle
//! (`doc`) and the selection store (`RwSignal<Selection>`). Components take
//! the document handle as an explicit prop rather than reaching for context.

pub mod doc;
