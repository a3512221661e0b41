//! Sort selection and cursor state over an [`EntityStore`].
//!
//! The controller holds no entity data. The cursor is a position in the
//! current sorted sequence, not an entity identity, so a re-sort keeps the
//! index and usually changes the entity under it.

use tracing::debug;

use super::entity::Entity;
use super::sort::{SortError, SortRegistry, order};
use super::store::EntityStore;

/// Cursor position within the sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// No entities, nothing selected.
    #[default]
    Empty,
    /// Index into the sorted sequence, always `< count`.
    Positioned(usize),
}

impl Cursor {
    pub fn index(&self) -> Option<usize> {
        match self {
            Cursor::Empty => None,
            Cursor::Positioned(n) => Some(*n),
        }
    }
}

/// Sort-field selection and cursor state.
#[derive(Debug)]
pub struct GridController {
    registry: SortRegistry,
    sort_field: &'static str,
    reverse: bool,
    cursor: Cursor,
}

impl GridController {
    /// Creates a controller sorting by `sort_field`.
    ///
    /// An unregistered field is a configuration error.
    pub fn new(registry: SortRegistry, sort_field: &str) -> Result<Self, SortError> {
        let sort_field = registry
            .resolve(sort_field)
            .map(|s| s.name())
            .ok_or_else(|| SortError::Unknown(sort_field.to_string()))?;
        Ok(Self {
            registry,
            sort_field,
            reverse: false,
            cursor: Cursor::Empty,
        })
    }

    pub fn sort_field(&self) -> &'static str {
        self.sort_field
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn registry(&self) -> &SortRegistry {
        &self.registry
    }

    /// Entities of `store` in the current sort order. Recomputed on every call.
    pub fn ordered_entities<'a>(&self, store: &'a EntityStore) -> Vec<&'a Entity> {
        let mut entities: Vec<&Entity> = store.all_entities().collect();
        match self.registry.resolve(self.sort_field) {
            Some(strategy) => order(strategy, &mut entities, self.reverse),
            None => {
                // sort_field is only ever set from a resolved strategy
                debug_assert!(false, "sort field {} not registered", self.sort_field);
                entities.sort_by(|a, b| a.id().cmp(b.id()));
            }
        }
        entities
    }

    /// Ids of `store` in the current sort order.
    pub fn ordered_ids(&self, store: &EntityStore) -> Vec<String> {
        self.ordered_entities(store)
            .into_iter()
            .map(|e| e.id().to_string())
            .collect()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.cursor.index()
    }

    /// True iff the cursor is positioned at `position`.
    pub fn is_selected(&self, position: usize) -> bool {
        self.cursor == Cursor::Positioned(position)
    }

    /// Re-validates the cursor against the current entity count.
    pub fn sync(&mut self, count: usize) {
        let next = match (self.cursor, count) {
            (_, 0) => Cursor::Empty,
            (Cursor::Empty, _) => Cursor::Positioned(0),
            (Cursor::Positioned(n), count) if n >= count => Cursor::Positioned(count - 1),
            (cursor, _) => cursor,
        };
        if next != self.cursor {
            debug!(from = ?self.cursor, to = ?next, count, "cursor re-validated");
            self.cursor = next;
        }
        debug_assert!(match self.cursor {
            Cursor::Empty => count == 0,
            Cursor::Positioned(n) => n < count,
        });
    }

    /// Moves one row up; no-op at the top or when empty.
    pub fn move_cursor_up(&mut self, store: &EntityStore) -> bool {
        self.page_up(store, 1)
    }

    /// Moves one row down; no-op at the bottom or when empty.
    pub fn move_cursor_down(&mut self, store: &EntityStore) -> bool {
        self.page_down(store, 1)
    }

    /// Moves up by `n` rows, stopping at the first row.
    pub fn page_up(&mut self, store: &EntityStore, n: usize) -> bool {
        self.sync(store.count());
        match self.cursor {
            Cursor::Positioned(pos) if pos > 0 && n > 0 => {
                self.cursor = Cursor::Positioned(pos.saturating_sub(n));
                true
            }
            _ => false,
        }
    }

    /// Moves down by `n` rows, stopping at the last row.
    pub fn page_down(&mut self, store: &EntityStore, n: usize) -> bool {
        let count = store.count();
        self.sync(count);
        match self.cursor {
            Cursor::Positioned(pos) if pos + 1 < count && n > 0 => {
                self.cursor = Cursor::Positioned(pos.saturating_add(n).min(count - 1));
                true
            }
            _ => false,
        }
    }

    pub fn move_cursor_top(&mut self, store: &EntityStore) -> bool {
        self.sync(store.count());
        match self.cursor {
            Cursor::Positioned(pos) if pos > 0 => {
                self.cursor = Cursor::Positioned(0);
                true
            }
            _ => false,
        }
    }

    pub fn move_cursor_bottom(&mut self, store: &EntityStore) -> bool {
        self.page_down(store, usize::MAX)
    }

    /// Selects a registered sort strategy by name.
    ///
    /// A rejected name changes nothing. The cursor index is kept.
    pub fn change_sort_field(&mut self, name: &str) -> Result<(), SortError> {
        let field = self
            .registry
            .resolve(name)
            .map(|s| s.name())
            .ok_or_else(|| SortError::Unknown(name.to_string()))?;
        if field != self.sort_field {
            debug!(from = self.sort_field, to = field, "sort field changed");
            self.sort_field = field;
        }
        Ok(())
    }

    /// Switches to the strategy registered after the current one.
    pub fn cycle_sort_field(&mut self) -> &'static str {
        if let Some(next) = self.registry.next_after(self.sort_field) {
            self.sort_field = next;
        }
        self.sort_field
    }

    pub fn toggle_reverse(&mut self) -> bool {
        self.reverse = !self.reverse;
        self.reverse
    }
}
