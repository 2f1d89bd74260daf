//! Leptos Surface
//!
//! Reactive state behind the three UI regions, using reactive_stores for
//! field-level updates. The components read it; [`TodoView`] writes it.
//!
//! [`TodoView`]: crate::view::TodoView

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::FilterMode;
use crate::view::{Row, Surface};

/// State of the entry field, filter controls and item list
#[derive(Clone, Debug, Default, Store)]
pub struct SurfaceState {
    /// Text currently in the entry field
    pub entry: String,
    /// Filter whose control carries the active marker
    pub active_filter: FilterMode,
    /// Rows of the last render
    pub rows: Vec<Row>,
}

pub type SurfaceStore = Store<SurfaceState>;

/// [`Surface`] backed by a [`SurfaceStore`]
#[derive(Clone, Copy)]
pub struct LeptosSurface {
    state: SurfaceStore,
}

impl LeptosSurface {
    pub fn new(state: SurfaceStore) -> Self {
        Self { state }
    }
}

impl Surface for LeptosSurface {
    fn clear_input(&mut self) {
        self.state.entry().set(String::new());
    }

    fn set_active_filter(&mut self, mode: FilterMode) {
        self.state.active_filter().set(mode);
    }

    fn render_rows(&mut self, rows: Vec<Row>) {
        self.state.rows().set(rows);
    }
}
