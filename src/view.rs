//! Todo View
//!
//! Toolkit-agnostic event dispatch. Components translate host events into
//! [`UiEvent`]s; the view applies them to the store and pushes a full
//! re-render into its [`Surface`].

use crate::error::{TodoError, TodoResult};
use crate::models::{FilterMode, Item, ItemId};
use crate::store::{IdSource, TodoStore};

/// One rendered row, bound to the item it shows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    pub id: ItemId,
    pub content: String,
    pub completed: bool,
}

impl From<&Item> for Row {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            content: item.content.clone(),
            completed: item.completed,
        }
    }
}

/// Host presentation regions the view writes into
pub trait Surface {
    fn clear_input(&mut self);
    /// Move the active marker to `mode`'s control
    fn set_active_filter(&mut self, mode: FilterMode);
    /// Replace the whole item list
    fn render_rows(&mut self, rows: Vec<Row>);
}

/// Where an event originated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventClass {
    EntryKey,
    ControlsClick,
    ListClick,
    ListFocusLoss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Key pressed in the entry field, with the field's current text
    EntryKey { key: String, text: String },
    FilterClick(FilterMode),
    DeleteClick(ItemId),
    ToggleClick { id: ItemId, checked: bool },
    /// Editable content lost focus
    ContentBlur { id: ItemId, text: String },
}

impl UiEvent {
    pub fn class(&self) -> EventClass {
        match self {
            UiEvent::EntryKey { .. } => EventClass::EntryKey,
            UiEvent::FilterClick(_) => EventClass::ControlsClick,
            UiEvent::DeleteClick(_) | UiEvent::ToggleClick { .. } => EventClass::ListClick,
            UiEvent::ContentBlur { .. } => EventClass::ListFocusLoss,
        }
    }
}

/// Effect of a handled event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Store changed and the list was re-rendered
    Rendered,
    /// Store changed, display already current
    Updated,
    Ignored,
}

pub struct TodoView<S> {
    surface: S,
    current_filter: FilterMode,
    accept_key: String,
}

impl<S: Surface> TodoView<S> {
    pub fn new(surface: S, initial_filter: FilterMode, accept_key: impl Into<String>) -> Self {
        Self {
            surface,
            current_filter: initial_filter,
            accept_key: accept_key.into(),
        }
    }

    /// First render after the surface is attached
    pub fn mount<I: IdSource>(&mut self, store: &TodoStore<I>) {
        self.surface.set_active_filter(self.current_filter);
        self.render(store);
    }

    pub fn handle<I: IdSource>(&mut self, store: &mut TodoStore<I>, event: UiEvent) -> Handled {
        let class = event.class();
        let handled = match event {
            UiEvent::EntryKey { key, text } => self.on_entry_key(store, &key, &text),
            UiEvent::FilterClick(mode) => self.on_filter_click(store, mode),
            UiEvent::DeleteClick(id) => {
                store.delete(id);
                self.render(store);
                Handled::Rendered
            }
            UiEvent::ToggleClick { id, checked } => self.edit(store, id, |item| item.completed = checked, true),
            UiEvent::ContentBlur { id, text } => self.edit(store, id, |item| item.content = text, false),
        };
        tracing::trace!(?class, ?handled, "ui event handled");
        handled
    }

    fn on_entry_key<I: IdSource>(&mut self, store: &mut TodoStore<I>, key: &str, text: &str) -> Handled {
        if key != self.accept_key {
            return Handled::Ignored;
        }
        let content = match entry_content(text) {
            Ok(content) => content,
            Err(err) => {
                tracing::trace!(%err, "entry ignored");
                return Handled::Ignored;
            }
        };
        store.add(content);
        self.surface.clear_input();
        self.render(store);
        Handled::Rendered
    }

    fn on_filter_click<I: IdSource>(&mut self, store: &TodoStore<I>, mode: FilterMode) -> Handled {
        if mode == self.current_filter {
            return Handled::Ignored;
        }
        self.current_filter = mode;
        self.surface.set_active_filter(mode);
        self.render(store);
        Handled::Rendered
    }

    fn edit<I: IdSource>(
        &mut self,
        store: &mut TodoStore<I>,
        id: ItemId,
        change: impl FnOnce(&mut Item),
        rerender: bool,
    ) -> Handled {
        let mut item = match store.get(id) {
            Ok(item) => item,
            Err(err) => {
                tracing::warn!(%err, "edit on a row that is no longer stored");
                return Handled::Ignored;
            }
        };
        change(&mut item);
        store.update(item);
        if rerender {
            self.render(store);
            Handled::Rendered
        } else {
            Handled::Updated
        }
    }

    fn render<I: IdSource>(&mut self, store: &TodoStore<I>) {
        let rows: Vec<Row> = store.list_by_filter(self.current_filter).map(Row::from).collect();
        tracing::debug!(filter = self.current_filter.name(), rows = rows.len(), "render");
        self.surface.render_rows(rows);
    }
}

/// Trimmed entry text; blank text is rejected
fn entry_content(text: &str) -> TodoResult<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(TodoError::InvalidInput("blank entry".to_string()))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeedItem;

    #[derive(Default)]
    struct RecordingSurface {
        renders: Vec<Vec<Row>>,
        active: Option<FilterMode>,
        clears: usize,
    }

    impl RecordingSurface {
        fn last_rows(&self) -> &[Row] {
            self.renders.last().map(Vec::as_slice).unwrap_or_default()
        }
    }

    impl Surface for RecordingSurface {
        fn clear_input(&mut self) {
            self.clears += 1;
        }

        fn set_active_filter(&mut self, mode: FilterMode) {
            self.active = Some(mode);
        }

        fn render_rows(&mut self, rows: Vec<Row>) {
            self.renders.push(rows);
        }
    }

    fn setup() -> (TodoStore, TodoView<RecordingSurface>) {
        let seed: Vec<SeedItem> = [true, true, false, false, true, true, false, false]
            .iter()
            .enumerate()
            .map(|(i, &completed)| SeedItem {
                content: format!("Task {}", i + 1),
                completed,
            })
            .collect();
        let store = TodoStore::with_seed(&seed);
        let mut view = TodoView::new(RecordingSurface::default(), FilterMode::All, "Enter");
        view.mount(&store);
        (store, view)
    }

    fn enter(text: &str) -> UiEvent {
        UiEvent::EntryKey {
            key: "Enter".to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_mount_renders_everything() {
        let (_, view) = setup();
        assert_eq!(view.surface.renders.len(), 1);
        assert_eq!(view.surface.last_rows().len(), 8);
        assert_eq!(view.surface.active, Some(FilterMode::All));
    }

    #[test]
    fn test_enter_adds_trimmed_item() {
        let (mut store, mut view) = setup();

        assert_eq!(view.handle(&mut store, enter("  buy milk ")), Handled::Rendered);

        let last = view.surface.last_rows().last().unwrap();
        assert_eq!(last.content, "buy milk");
        assert!(!last.completed);
        assert_eq!(store.len(), 9);
        assert_eq!(view.surface.clears, 1);
    }

    #[test]
    fn test_blank_entry_and_other_keys_ignored() {
        let (mut store, mut view) = setup();

        assert_eq!(view.handle(&mut store, enter("   ")), Handled::Ignored);
        let other_key = UiEvent::EntryKey {
            key: "a".to_string(),
            text: "buy milk".to_string(),
        };
        assert_eq!(view.handle(&mut store, other_key), Handled::Ignored);

        assert_eq!(store.len(), 8);
        assert_eq!(view.surface.renders.len(), 1);
        assert_eq!(view.surface.clears, 0);
    }

    #[test]
    fn test_filter_click_switches_and_renders() {
        let (mut store, mut view) = setup();

        assert_eq!(view.handle(&mut store, UiEvent::FilterClick(FilterMode::Completed)), Handled::Rendered);

        assert_eq!(view.current_filter, FilterMode::Completed);
        assert_eq!(view.surface.active, Some(FilterMode::Completed));
        let contents: Vec<_> = view.surface.last_rows().iter().map(|row| row.content.as_str()).collect();
        assert_eq!(contents, vec!["Task 1", "Task 2", "Task 5", "Task 6"]);
    }

    #[test]
    fn test_active_filter_click_is_idempotent() {
        let (mut store, mut view) = setup();

        assert_eq!(view.handle(&mut store, UiEvent::FilterClick(FilterMode::All)), Handled::Ignored);
        assert_eq!(view.surface.renders.len(), 1);

        view.handle(&mut store, UiEvent::FilterClick(FilterMode::InProgress));
        assert_eq!(view.handle(&mut store, UiEvent::FilterClick(FilterMode::InProgress)), Handled::Ignored);
        assert_eq!(view.surface.renders.len(), 2);
    }

    #[test]
    fn test_delete_click_removes_row() {
        let (mut store, mut view) = setup();
        let id = store.items()[0].id;

        assert_eq!(view.handle(&mut store, UiEvent::DeleteClick(id)), Handled::Rendered);

        assert_eq!(store.len(), 7);
        assert!(view.surface.last_rows().iter().all(|row| row.id != id));
    }

    #[test]
    fn test_toggle_moves_item_between_filters() {
        let (mut store, mut view) = setup();
        let id = store.items()[2].id;
        view.handle(&mut store, UiEvent::FilterClick(FilterMode::InProgress));
        assert!(view.surface.last_rows().iter().any(|row| row.id == id));

        let handled = view.handle(&mut store, UiEvent::ToggleClick { id, checked: true });

        assert_eq!(handled, Handled::Rendered);
        assert!(store.get(id).unwrap().completed);
        assert!(view.surface.last_rows().iter().all(|row| row.id != id));
    }

    #[test]
    fn test_content_blur_updates_without_render() {
        let (mut store, mut view) = setup();
        let id = store.items()[3].id;

        let handled = view.handle(
            &mut store,
            UiEvent::ContentBlur {
                id,
                text: "edited".to_string(),
            },
        );

        assert_eq!(handled, Handled::Updated);
        assert_eq!(view.surface.renders.len(), 1);
        assert_eq!(store.get(id).unwrap().content, "edited");

        // The next render reads the edited content from the store
        view.handle(&mut store, UiEvent::FilterClick(FilterMode::InProgress));
        let row = view.surface.last_rows().iter().find(|row| row.id == id).unwrap();
        assert_eq!(row.content, "edited");
    }

    #[test]
    fn test_events_for_unknown_rows_ignored() {
        let (mut store, mut view) = setup();
        let missing = ItemId::from_u128(99);
        let before = store.items().to_vec();

        let toggle = UiEvent::ToggleClick { id: missing, checked: true };
        let blur = UiEvent::ContentBlur {
            id: missing,
            text: "ghost".to_string(),
        };
        assert_eq!(view.handle(&mut store, toggle), Handled::Ignored);
        assert_eq!(view.handle(&mut store, blur), Handled::Ignored);
        assert_eq!(store.items(), before.as_slice());
        assert_eq!(view.surface.renders.len(), 1);
    }

    #[test]
    fn test_row_content_keeps_raw_text() {
        let (mut store, mut view) = setup();
        view.handle(&mut store, enter("<b>bold</b> & <script>"));

        let last = view.surface.last_rows().last().unwrap();
        assert_eq!(last.content, "<b>bold</b> & <script>");
    }

    #[test]
    fn test_delete_unknown_then_toggle_back_and_forth() {
        let (mut store, mut view) = setup();
        let id = store.items()[2].id;

        assert_eq!(view.handle(&mut store, UiEvent::DeleteClick(ItemId::from_u128(99))), Handled::Rendered);
        assert_eq!(store.len(), 8);

        view.handle(&mut store, UiEvent::FilterClick(FilterMode::Completed));
        view.handle(&mut store, UiEvent::ToggleClick { id, checked: true });
        assert!(view.surface.last_rows().iter().any(|row| row.id == id));

        view.handle(&mut store, UiEvent::ToggleClick { id, checked: false });
        assert!(view.surface.last_rows().iter().all(|row| row.id != id));

        view.handle(&mut store, UiEvent::FilterClick(FilterMode::InProgress));
        assert!(view.surface.last_rows().iter().any(|row| row.id == id));
    }

    #[test]
    fn test_event_classes() {
        let id = ItemId::from_u128(1);
        assert_eq!(enter("x").class(), EventClass::EntryKey);
        assert_eq!(UiEvent::FilterClick(FilterMode::All).class(), EventClass::ControlsClick);
        assert_eq!(UiEvent::DeleteClick(id).class(), EventClass::ListClick);
        assert_eq!(UiEvent::ToggleClick { id, checked: false }.class(), EventClass::ListClick);
        assert_eq!(
            UiEvent::ContentBlur { id, text: String::new() }.class(),
            EventClass::ListFocusLoss
        );
    }
}
