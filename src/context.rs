//! Application Context
//!
//! Shared handle provided via Leptos Context API. Owns the item store and
//! the view; components only send it [`UiEvent`]s.

use leptos::prelude::*;

use crate::store::TodoStore;
use crate::surface::{LeptosSurface, SurfaceStore};
use crate::view::{Handled, TodoView, UiEvent};

#[derive(Clone, Copy)]
pub struct AppContext {
    store: StoredValue<TodoStore>,
    view: StoredValue<TodoView<LeptosSurface>>,
    /// State rendered by the components
    pub surface: SurfaceStore,
}

impl AppContext {
    /// Take ownership of the store and view and perform the first render
    pub fn new(store: TodoStore, mut view: TodoView<LeptosSurface>, surface: SurfaceStore) -> Self {
        view.mount(&store);
        Self {
            store: StoredValue::new(store),
            view: StoredValue::new(view),
            surface,
        }
    }

    /// Apply a UI event to the store and re-render as needed
    pub fn dispatch(&self, event: UiEvent) -> Option<Handled> {
        let store = self.store;
        let handled = self
            .view
            .try_update_value(|view| store.try_update_value(|store| view.handle(store, event)))
            .flatten();
        if handled.is_none() {
            tracing::error!("event dispatched after the app context was disposed");
        }
        handled
    }
}

/// Get the app context provided by [`App`](crate::app::App)
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
