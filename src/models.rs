//! Frontend Models
//!
//! Task items, their identifiers and the filter modes used to view them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Fixed ids for tests
    #[cfg(test)]
    pub fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A task item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub content: String,
    pub completed: bool,
}

impl Item {
    pub fn new(id: ItemId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            completed: false,
        }
    }
}

/// Configured startup item; the store assigns its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub content: String,
    #[serde(default)]
    pub completed: bool,
}

/// Which subsequence of items is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    #[default]
    All,
    Completed,
    InProgress,
}

impl FilterMode {
    /// Filter controls in display order
    pub const CONTROLS: [FilterMode; 3] = [FilterMode::All, FilterMode::Completed, FilterMode::InProgress];

    pub fn name(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Completed => "completed",
            FilterMode::InProgress => "in-progress",
        }
    }

    /// Unknown names select everything
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "completed" => FilterMode::Completed,
            "in-progress" => FilterMode::InProgress,
            _ => FilterMode::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Completed => "Completed",
            FilterMode::InProgress => "In progress",
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Completed => item.completed,
            FilterMode::InProgress => !item.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_mode_names() {
        for mode in FilterMode::CONTROLS {
            assert_eq!(FilterMode::from_name(mode.name()), mode);
        }
    }

    #[test]
    fn test_unknown_filter_name_selects_all() {
        assert_eq!(FilterMode::from_name("isprogress"), FilterMode::All);
        assert_eq!(FilterMode::from_name(""), FilterMode::All);
    }

    #[test]
    fn test_filter_matches() {
        let mut item = Item::new(ItemId::from_u128(1), "Task");
        assert!(FilterMode::All.matches(&item));
        assert!(FilterMode::InProgress.matches(&item));
        assert!(!FilterMode::Completed.matches(&item));

        item.completed = true;
        assert!(FilterMode::Completed.matches(&item));
        assert!(!FilterMode::InProgress.matches(&item));
    }

    #[test]
    fn test_new_item_starts_in_progress() {
        let id = ItemId::new_v4();
        let item = Item::new(id, "Task");
        assert_eq!(item.id, id);
        assert_eq!(item.content, "Task");
        assert!(!item.completed);
        assert_ne!(ItemId::new_v4(), id);
    }

    #[test]
    fn test_item_id_display() {
        let id = ItemId::from_u128(1);
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000001");
    }
}
