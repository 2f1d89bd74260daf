//! Filter Controls Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::FilterMode;
use crate::surface::SurfaceStateStoreFields;
use crate::view::UiEvent;

/// One button per filter mode; the active one carries the `active` class
#[component]
pub fn FilterControls() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="todo-controls">
            {FilterMode::CONTROLS.iter().map(|&mode| {
                let is_active = move || ctx.surface.active_filter().get() == mode;
                view! {
                    <button
                        class=move || if is_active() { format!("{} active", mode.name()) } else { mode.name().to_string() }
                        on:click=move |_| {
                            ctx.dispatch(UiEvent::FilterClick(mode));
                        }
                    >
                        {mode.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
