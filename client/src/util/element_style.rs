//! CSS class derivation for rendered elements.

#[cfg(test)]
#[path = "element_style_test.rs"]
mod element_style_test;

use diagram::doc::ElementRecord;
use diagram::patch::{FillColor, FillStyle};

/// Class list for an element row: kind, fill color, fill style, selection.
///
/// Unknown color or style strings are ignored rather than echoed into the DOM.
pub fn element_classes(record: &ElementRecord, selected: bool) -> String {
    let mut classes = vec!["element".to_owned(), format!("element--{}", record.type_tag().to_ascii_lowercase())];

    let color = record
        .attribute("fillColor")
        .and_then(|v| serde_json::from_value::<FillColor>(v.clone()).ok());
    if let Some(color) = color {
        classes.push(color.css_class().to_owned());
    }

    let style = record
        .attribute("fillStyle")
        .and_then(|v| serde_json::from_value::<FillStyle>(v.clone()).ok());
    if let Some(style) = style {
        classes.push(format!("element--{}", style.as_str()));
    }

    if selected {
        classes.push("element--selected".to_owned());
    }
    classes.join(" ")
}

/// Text shown for an element: its label, or its id when unlabeled.
pub fn element_caption(record: &ElementRecord) -> String {
    record
        .label()
        .filter(|label| !label.trim().is_empty())
        .unwrap_or(record.id.as_str())
        .to_owned()
}
