//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render editor chrome and read/write shared state through
//! handles passed in as props.

pub mod attribute_toolbar;
pub mod element_node;
