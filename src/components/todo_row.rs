//! Todo Row Component
//!
//! A single item in the list. Every handler carries the row's item id.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::view::{Row, UiEvent};

#[component]
pub fn TodoRow(row: Row) -> impl IntoView {
    let ctx = use_app_context();
    let id = row.id;

    view! {
        <div class=if row.completed { "todo-item completed" } else { "todo-item" }>
            <input
                class="item-checkbox"
                type="checkbox"
                prop:checked=row.completed
                on:change=move |ev| {
                    ctx.dispatch(UiEvent::ToggleClick { id, checked: event_target_checked(&ev) });
                }
            />

            // Text node, so markup typed by the user stays text
            <span
                class="item-content"
                contenteditable="true"
                on:focusout=move |ev| {
                    let target: web_sys::HtmlElement = event_target(&ev);
                    let text = target.text_content().unwrap_or_default();
                    ctx.dispatch(UiEvent::ContentBlur { id, text });
                }
            >
                {row.content}
            </span>

            <button class="item-deleteBtn" on:click=move |_| {
                ctx.dispatch(UiEvent::DeleteClick(id));
            }>"X"</button>
        </div>
    }
}
