//! Todo Widget App
//!
//! Root component: builds the store and view from config and lays out the
//! entry field, filter controls and item list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterControls, TodoInput, TodoList};
use crate::config::WidgetConfig;
use crate::context::AppContext;
use crate::store::TodoStore;
use crate::surface::{LeptosSurface, SurfaceState, SurfaceStateStoreFields};
use crate::view::TodoView;

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let surface = Store::new(SurfaceState::default());
    let store = TodoStore::with_seed(&config.seed);
    tracing::debug!(items = store.len(), "store seeded");
    let todo_view = TodoView::new(LeptosSurface::new(surface), config.initial_filter(), config.accept_key);

    // Provide context to all children
    provide_context(AppContext::new(store, todo_view, surface));

    view! {
        <main class="todo-app">
            <h1>"Todo"</h1>
            <TodoInput placeholder=config.placeholder />
            <FilterControls />
            <TodoList />
            <p class="item-count">{move || format!("{} shown", surface.rows().with(|rows| rows.len()))}</p>
        </main>
    }
}
