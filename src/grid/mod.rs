//! Grid model: entity storage, sort strategies, cursor and selection.
//!
//! [`Grid`] is the single owner of both halves. Every mutation that can
//! change the entity count goes through it and re-validates the cursor, so
//! an out-of-range cursor is never observable.

mod controller;
mod entity;
mod sort;
mod store;

pub use controller::{Cursor, GridController};
pub use entity::{Entity, Metrics};
pub use sort::{SortError, SortField, SortRegistry, SortStrategy, order};
pub use store::EntityStore;

/// Column labels of the table, in display order.
pub const HEADER: [&str; 5] = ["NAME", "CID", "CPU", "MEM", "NET RX/TX"];

/// Entity store plus the controller that orders and selects from it.
#[derive(Debug)]
pub struct Grid {
    store: EntityStore,
    controller: GridController,
}

impl Grid {
    pub fn new(controller: GridController) -> Self {
        let mut grid = Self {
            store: EntityStore::new(),
            controller,
        };
        grid.controller.sync(0);
        grid
    }

    /// Grid over the built-in strategies, sorted by `sort_field`.
    pub fn with_sort_field(sort_field: &str) -> Result<Self, SortError> {
        GridController::new(SortRegistry::builtin(), sort_field).map(Self::new)
    }

    /// Static column labels.
    pub fn header(&self) -> &'static [&'static str] {
        &HEADER
    }

    pub fn controller(&self) -> &GridController {
        &self.controller
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.store.get(id)
    }

    pub fn upsert(&mut self, id: &str, display_name: &str) -> bool {
        let created = self.store.upsert(id, display_name);
        self.controller.sync(self.store.count());
        created
    }

    pub fn update_metrics(&mut self, id: &str, metrics: Metrics) -> bool {
        let created = self.store.update_metrics(id, metrics);
        self.controller.sync(self.store.count());
        created
    }

    pub fn remove(&mut self, id: &str) -> Option<Entity> {
        let removed = self.store.remove(id);
        self.controller.sync(self.store.count());
        removed
    }

    pub fn ordered_ids(&self) -> Vec<String> {
        self.controller.ordered_ids(&self.store)
    }

    pub fn ordered_entities(&self) -> Vec<&Entity> {
        self.controller.ordered_entities(&self.store)
    }

    pub fn is_selected(&self, position: usize) -> bool {
        self.controller.is_selected(position)
    }

    pub fn cursor(&self) -> Cursor {
        self.controller.cursor()
    }

    /// Id of the entity under the cursor.
    pub fn selected_id(&self) -> Option<String> {
        let index = self.controller.selected_index()?;
        self.ordered_entities()
            .get(index)
            .map(|e| e.id().to_string())
    }

    pub fn move_cursor_up(&mut self) -> bool {
        self.controller.move_cursor_up(&self.store)
    }

    pub fn move_cursor_down(&mut self) -> bool {
        self.controller.move_cursor_down(&self.store)
    }

    pub fn page_up(&mut self, rows: usize) -> bool {
        self.controller.page_up(&self.store, rows)
    }

    pub fn page_down(&mut self, rows: usize) -> bool {
        self.controller.page_down(&self.store, rows)
    }

    pub fn move_cursor_top(&mut self) -> bool {
        self.controller.move_cursor_top(&self.store)
    }

    pub fn move_cursor_bottom(&mut self) -> bool {
        self.controller.move_cursor_bottom(&self.store)
    }

    pub fn sort_field(&self) -> &'static str {
        self.controller.sort_field()
    }

    pub fn change_sort_field(&mut self, name: &str) -> Result<(), SortError> {
        self.controller.change_sort_field(name)
    }

    pub fn cycle_sort_field(&mut self) -> &'static str {
        self.controller.cycle_sort_field()
    }

    pub fn toggle_reverse(&mut self) -> bool {
        self.controller.toggle_reverse()
    }
}
