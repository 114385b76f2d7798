// Session state: hydrate once, mutate through list operations, persist each change

use crate::list::{IdGen, TaskList};
use crate::store::Store;
use crate::task::Task;
use tracing::warn;

/// The single mutator of the task collection for one process lifetime.
/// Hydrates from the store once at start; every mutation applies a pure
/// collection operation and then saves the whole collection synchronously.
/// When a save fails, the in-memory value stays authoritative for the rest
/// of the session: no retry, no write queue.
pub struct Session {
    list: TaskList,
    ids: IdGen,
    store: Store,
}

impl Session {
    pub fn start(store: Store) -> Self {
        let list = store.load();
        let ids = IdGen::seeded(&list);
        Self { list, ids, store }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.list
    }

    /// Add a task; returns the new task, or `None` when the trimmed text was
    /// empty and the collection was left untouched.
    pub fn add(&mut self, text: &str) -> Option<Task> {
        let next = self.list.add(&mut self.ids, text);
        if next.total() == self.list.total() {
            return None;
        }
        self.commit(next);
        self.list.tasks().last().cloned()
    }

    /// Flip completion on `id`; false when no such task exists.
    pub fn toggle(&mut self, id: i64) -> bool {
        if !self.list.contains(id) {
            return false;
        }
        let next = self.list.toggle(id);
        self.commit(next);
        true
    }

    /// Remove the task with `id`; false when no such task exists.
    pub fn delete(&mut self, id: i64) -> bool {
        if !self.list.contains(id) {
            return false;
        }
        let next = self.list.delete(id);
        self.commit(next);
        true
    }

    /// Remove every completed task; returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let removed = self.list.completed_count();
        if removed > 0 {
            let next = self.list.clear_completed();
            self.commit(next);
        }
        removed
    }

    fn commit(&mut self, next: TaskList) {
        self.list = next;
        if let Err(e) = self.store.save(&self.list) {
            warn!(error = ?e, "Save failed; continuing with in-memory state");
        }
    }
}
