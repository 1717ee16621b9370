//! Attribute toolbar: color, fill-style, and label controls for selected nodes.
//!
//! ARCHITECTURE
//! ============
//! The submenu state machine and merge semantics live in
//! `diagram::toolbar::AttributeToolbar`; this component only renders the
//! current state and routes DOM events into it. The document handle is an
//! explicit prop so the toolbar never reaches for an ambient document.

use leptos::prelude::*;

use diagram::patch::{AttributePatch, FillColor, FillStyle};
use diagram::selection::Selection;
use diagram::toolbar::{AttributeToolbar as Controller, MenuState, Submenu};

use crate::state::doc::DocHandle;

/// Vertical toolbar that patches the `data` of every selected node.
#[component]
pub fn AttributeToolbar(
    /// Shared document the patches are merged into.
    doc: DocHandle,
    /// Current canvas selection (read-only here).
    #[prop(into)]
    selection: Signal<Selection>,
) -> impl IntoView {
    let controller = RwSignal::new(Controller::new());
    let label_draft = RwSignal::new(String::new());

    let menu = move || controller.with(Controller::menu);
    let is_open = move |submenu: Submenu| controller.with(|c| c.is_open(submenu));

    let apply = move |patch: AttributePatch| {
        let selected = selection.get_untracked();
        let mut next = controller.get_untracked();
        let outcome = doc.merge_patch(&mut next, &selected, patch);
        controller.set(next);
        if outcome.is_none() {
            leptos::logging::warn!("attribute patch dropped: document handle disposed");
        }
        doc.publish_pending();
    };

    let on_label_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() != diagram::toolbar::SUBMIT_KEY {
            return;
        }
        ev.prevent_default();
        apply(AttributePatch::label(label_draft.get_untracked()));
        label_draft.set(String::new());
    };

    view! {
        <div class="attribute-toolbar">
            <div class="attribute-toolbar__group">
                {Submenu::ALL
                    .into_iter()
                    .map(|submenu| {
                        view! {
                            <button
                                class=move || {
                                    if is_open(submenu) {
                                        "btn attribute-toolbar__button attribute-toolbar__button--active"
                                    } else {
                                        "btn attribute-toolbar__button"
                                    }
                                }
                                title=submenu.title()
                                on:click=move |_| controller.update(|c| c.open(submenu))
                            >
                                {submenu_glyph(submenu)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || menu() != MenuState::Closed>
                <div
                    class="attribute-toolbar__backdrop"
                    on:click=move |_| controller.update(Controller::click_away)
                ></div>
            </Show>

            <Show when=move || is_open(Submenu::Color)>
                <div id=Submenu::Color.panel_id() class="attribute-toolbar__group attribute-toolbar__panel">
                    {FillColor::ALL
                        .into_iter()
                        .map(|color| {
                            view! {
                                <button
                                    class="btn attribute-toolbar__swatch"
                                    title=color.as_str()
                                    on:click=move |_| apply(AttributePatch::fill_color(color))
                                >
                                    <span class=format!("swatch {}", color.css_class())>"●"</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>

            <Show when=move || is_open(Submenu::Fill)>
                <div id=Submenu::Fill.panel_id() class="attribute-toolbar__group attribute-toolbar__panel">
                    {FillStyle::ALL
                        .into_iter()
                        .map(|style| {
                            view! {
                                <button
                                    class="btn attribute-toolbar__fill"
                                    title=style.title()
                                    on:click=move |_| apply(AttributePatch::fill_style(style))
                                >
                                    {fill_glyph(style)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>

            <Show when=move || is_open(Submenu::Text)>
                <label id=Submenu::Text.panel_id() class="attribute-toolbar__panel attribute-toolbar__text">
                    "Node Text"
                    <textarea
                        class="attribute-toolbar__textarea"
                        prop:value=move || label_draft.get()
                        on:input=move |ev| label_draft.set(event_target_value(&ev))
                        on:keydown=on_label_keydown
                        autofocus=true
                    ></textarea>
                </label>
            </Show>
        </div>
    }
}

fn submenu_glyph(submenu: Submenu) -> &'static str {
    match submenu {
        Submenu::Color => "🎨",
        Submenu::Fill => "▦",
        Submenu::Text => "T",
    }
}

fn fill_glyph(style: FillStyle) -> &'static str {
    match style {
        FillStyle::Dashed => "⬚",
        FillStyle::Filled => "■",
        FillStyle::Outlined => "□",
    }
}
