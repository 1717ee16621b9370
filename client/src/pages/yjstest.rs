//! Sandbox page showing the raw shared collection.
//!
//! Useful for checking that toolbar patches land in the document as
//! expected: every write shows up here as a new revision and snapshot.

use leptos::prelude::*;

use crate::state::doc::{DocHandle, sample_shape};

#[component]
pub fn YjsTestPage() -> impl IntoView {
    let doc = expect_context::<DocHandle>();
    let status = RwSignal::new(String::new());

    let snapshot = move || {
        doc.with(|d| d.to_json())
            .unwrap_or_else(|e| format!("snapshot failed: {e}"))
    };

    let on_add = move |_| {
        let record = sample_shape("New node");
        let id = record.id.clone();
        match doc.push(record) {
            Some(Ok(())) => status.set(format!("added {id}")),
            Some(Err(e)) => status.set(format!("add failed: {e}")),
            None => leptos::logging::warn!("document handle disposed"),
        }
    };

    view! {
        <div class="yjs-test-page">
            <header class="yjs-test-page__header">
                <h1>"Shared document"</h1>
                <span>{move || format!("revision {}", doc.revision())}</span>
                <button class="btn" on:click=on_add>
                    "Add node"
                </button>
                <span class="yjs-test-page__status">{move || status.get()}</span>
            </header>
            <pre class="yjs-test-page__snapshot">{snapshot}</pre>
        </div>
    }
}
