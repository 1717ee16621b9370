//! One element of the diagram as rendered on the editor surface.

use leptos::prelude::*;

use diagram::doc::ElementRecord;

use crate::util::element_style::{element_caption, element_classes};

/// Clickable element tile. `on_select` receives whether shift was held.
#[component]
pub fn ElementNode(record: ElementRecord, selected: bool, on_select: Callback<bool>) -> impl IntoView {
    let classes = element_classes(&record, selected);
    let caption = element_caption(&record);
    let kind = record.type_tag().to_owned();

    view! {
        <div
            class=classes
            data-id=record.id
            title=kind
            on:click=move |ev| {
                ev.stop_propagation();
                on_select.run(ev.shift_key());
            }
        >
            {caption}
        </div>
    }
}
