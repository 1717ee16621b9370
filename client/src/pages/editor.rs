//! Editor page: element surface plus the attribute toolbar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served for both `/app` and `/:doc_id`. The document id is taken from the
//! route table and only displayed; loading or validating the document is the
//! sync provider's job.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use diagram::route::RouteTable;
use diagram::selection::Selection;

use crate::components::attribute_toolbar::AttributeToolbar;
use crate::components::element_node::ElementNode;
use crate::state::doc::DocHandle;
use crate::util::selection_click::apply_click;

#[component]
pub fn EditorPage() -> impl IntoView {
    let doc = expect_context::<DocHandle>();
    let selection = expect_context::<RwSignal<Selection>>();
    let location = use_location();

    let doc_id = move || {
        RouteTable::resolve(&location.pathname.get())
            .and_then(|route| route.doc_id().map(str::to_owned))
    };

    // Elements can disappear underneath the selection when peers delete them.
    Effect::new(move || {
        doc.with(|d| {
            let stale = selection.with_untracked(|s| s.ids().any(|id| d.get(id).is_none()));
            if stale {
                selection.update(|s| s.retain_existing(d));
            }
        });
    });

    let elements = move || doc.with(|d| d.elements().to_vec());

    view! {
        <div class="editor-page">
            <header class="editor-page__header">
                <a href="/" class="editor-page__back" title="Back to home">
                    "←"
                </a>
                <span class="editor-page__doc">
                    {move || doc_id().unwrap_or_else(|| "Untitled".to_owned())}
                </span>
                <span class="editor-page__spacer"></span>
                <span class="editor-page__meta">
                    {move || format!("{} selected · rev {}", selection.with(Selection::len), doc.revision())}
                </span>
            </header>

            <AttributeToolbar doc=doc selection=selection/>

            <div class="editor-surface" on:click=move |_| selection.update(Selection::clear)>
                {move || {
                    elements()
                        .into_iter()
                        .map(|record| {
                            let selected = selection.with(|s| s.contains(&record.id));
                            let target = record.clone();
                            let on_select = Callback::new(move |additive: bool| {
                                selection.update(|s| apply_click(s, &target, additive));
                            });
                            view! { <ElementNode record=record selected=selected on_select=on_select/> }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
