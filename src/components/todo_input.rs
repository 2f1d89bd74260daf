//! Todo Input Component
//!
//! Entry field for new items; the accept key adds the text.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::surface::SurfaceStateStoreFields;
use crate::view::UiEvent;

/// Text entry control, focused on mount
#[component]
pub fn TodoInput(#[prop(into)] placeholder: String) -> impl IntoView {
    let ctx = use_app_context();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
        <input
            class="todo-input"
            type="text"
            placeholder=placeholder
            node_ref=input_ref
            prop:value=move || ctx.surface.entry().get()
            on:input=move |ev| ctx.surface.entry().set(event_target_value(&ev))
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                let text = event_target_value(&ev);
                ctx.dispatch(UiEvent::EntryKey { key: ev.key(), text });
            }
        />
    }
}
