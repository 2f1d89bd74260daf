//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_app_context;
use crate::surface::SurfaceStateStoreFields;

/// Item list container, showing the rows of the last render
#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="todo-items">
            <For
                each=move || ctx.surface.rows().get()
                // Whole row as key: any change to a row rebuilds it
                key=|row| row.clone()
                children=move |row| view! { <TodoRow row=row /> }
            />
        </div>
    }
}
