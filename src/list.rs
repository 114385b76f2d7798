// Task collection manager: pure value-to-value operations over the task list

use crate::filter::ViewFilter;
use crate::task::{Task, now_ms};

/// Monotonic id generator. Ids are millisecond timestamps, bumped past the
/// last issued id when the clock has not advanced, so rapid successive adds
/// within one clock tick still get unique, strictly increasing ids.
#[derive(Debug, Clone, Default)]
pub struct IdGen {
    last: i64,
}

impl IdGen {
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Seed from an existing collection so a reloaded session never reissues
    /// an id already present in the store.
    pub fn seeded(list: &TaskList) -> Self {
        Self { last: list.max_id() }
    }

    pub fn next(&mut self) -> i64 {
        let now = now_ms();
        self.last = if now > self.last { now } else { self.last + 1 };
        self.last
    }
}

/// Ordered collection of tasks, insertion order preserved. Every mutating
/// operation returns a new `TaskList` and leaves the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn max_id(&self) -> i64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0)
    }

    /// Append a new task with trimmed text. Whitespace-only text is a no-op
    /// and returns the collection unchanged.
    pub fn add(&self, ids: &mut IdGen, text: &str) -> TaskList {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return self.clone();
        }

        let mut tasks = self.tasks.clone();
        tasks.push(Task {
            id: ids.next(),
            text: trimmed.to_string(),
            completed: false,
            created_at: now_ms(),
        });
        TaskList { tasks }
    }

    /// Flip `completed` on the matching task; no-op when `id` is absent.
    pub fn toggle(&self, id: i64) -> TaskList {
        let tasks = self
            .tasks
            .iter()
            .cloned()
            .map(|mut t| {
                if t.id == id {
                    t.completed = !t.completed;
                }
                t
            })
            .collect();
        TaskList { tasks }
    }

    /// Remove the matching task; no-op when `id` is absent.
    pub fn delete(&self, id: i64) -> TaskList {
        let tasks = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        TaskList { tasks }
    }

    /// Drop every completed task in one replacement.
    pub fn clear_completed(&self) -> TaskList {
        let tasks = self.tasks.iter().filter(|t| !t.completed).cloned().collect();
        TaskList { tasks }
    }

    /// Projection of the tasks matching `filter`; does not mutate state.
    pub fn filtered_view(&self, filter: ViewFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Completed share as a rounded percentage, 0 for an empty collection.
    pub fn progress_percent(&self) -> u8 {
        if self.tasks.is_empty() {
            return 0;
        }
        ((self.completed_count() as f64 / self.tasks.len() as f64) * 100.0).round() as u8
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_incomplete_task() {
        let mut ids = IdGen::new();
        let list = TaskList::new();

        let list = list.add(&mut ids, "Buy milk");
        assert_eq!(list.total(), 1);
        assert_eq!(list.tasks()[0].text, "Buy milk");
        assert!(!list.tasks()[0].completed);
        assert!(list.tasks()[0].created_at > 0);
    }

    #[test]
    fn test_add_trims_text() {
        let mut ids = IdGen::new();
        let list = TaskList::new().add(&mut ids, "  Walk dog  ");
        assert_eq!(list.tasks()[0].text, "Walk dog");
    }

    #[test]
    fn test_add_whitespace_is_noop() {
        let mut ids = IdGen::new();
        let list = TaskList::new().add(&mut ids, "Buy milk");

        assert_eq!(list.add(&mut ids, "").total(), 1);
        assert_eq!(list.add(&mut ids, "   \t\n").total(), 1);
        assert_eq!(list.add(&mut ids, "   "), list);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut ids = IdGen::new();
        let list = TaskList::new()
            .add(&mut ids, "first")
            .add(&mut ids, "second")
            .add(&mut ids, "third");

        let texts: Vec<&str> = list.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_add_does_not_mutate_receiver() {
        let mut ids = IdGen::new();
        let before = TaskList::new().add(&mut ids, "first");
        let _after = before.add(&mut ids, "second");
        assert_eq!(before.total(), 1);
    }

    #[test]
    fn test_id_uniqueness_under_rapid_adds() {
        let mut ids = IdGen::new();
        let mut list = TaskList::new();
        for i in 0..100 {
            list = list.add(&mut ids, &format!("task {}", i));
        }

        let mut seen: Vec<i64> = list.tasks().iter().map(|t| t.id).collect();
        let count = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), count);
    }

    #[test]
    fn test_ids_strictly_increasing() {
        let mut ids = IdGen::new();
        let mut last = 0;
        for _ in 0..50 {
            let id = ids.next();
            assert!(id > last);
            last = id;
        }
    }

    #[test]
    fn test_idgen_seeded_from_collection() {
        let list = TaskList::from(vec![Task {
            id: i64::MAX - 10,
            text: "far future".to_string(),
            completed: false,
            created_at: 1000,
        }]);

        let mut ids = IdGen::seeded(&list);
        assert_eq!(ids.next(), i64::MAX - 9);
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut ids = IdGen::new();
        let list = TaskList::new().add(&mut ids, "Buy milk").add(&mut ids, "Walk dog");
        let id = list.tasks()[0].id;

        let once = list.toggle(id);
        assert!(once.get(id).unwrap().completed);
        assert_eq!(once.toggle(id), list);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut ids = IdGen::new();
        let list = TaskList::new().add(&mut ids, "Buy milk");
        assert_eq!(list.toggle(999), list);
    }

    #[test]
    fn test_toggle_leaves_other_tasks_unchanged() {
        let mut ids = IdGen::new();
        let list = TaskList::new().add(&mut ids, "a").add(&mut ids, "b");
        let toggled = list.toggle(list.tasks()[0].id);
        assert_eq!(toggled.tasks()[1], list.tasks()[1]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut ids = IdGen::new();
        let list = TaskList::new().add(&mut ids, "Buy milk").add(&mut ids, "Walk dog");
        let id = list.tasks()[0].id;

        let once = list.delete(id);
        assert_eq!(once.total(), 1);
        assert_eq!(once.delete(id), once);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut ids = IdGen::new();
        let list = TaskList::new().add(&mut ids, "Buy milk");
        assert_eq!(list.delete(999), list);
    }

    #[test]
    fn test_clear_completed() {
        let mut ids = IdGen::new();
        let list = TaskList::new()
            .add(&mut ids, "done 1")
            .add(&mut ids, "open")
            .add(&mut ids, "done 2");
        let list = list.toggle(list.tasks()[0].id);
        let list = list.toggle(list.tasks()[2].id);

        let cleared = list.clear_completed();
        assert_eq!(cleared.completed_count(), 0);
        assert_eq!(cleared.total(), 1);
        assert_eq!(cleared.tasks()[0].text, "open");
    }

    #[test]
    fn test_clear_completed_noop_when_none_completed() {
        let mut ids = IdGen::new();
        let list = TaskList::new().add(&mut ids, "open");
        assert_eq!(list.clear_completed(), list);
    }

    #[test]
    fn test_counts_partition_total() {
        let mut ids = IdGen::new();
        let mut list = TaskList::new();
        for i in 0..10 {
            list = list.add(&mut ids, &format!("task {}", i));
        }
        for id in [list.tasks()[1].id, list.tasks()[4].id, list.tasks()[7].id] {
            list = list.toggle(id);
        }

        assert_eq!(list.active_count() + list.completed_count(), list.total());
        assert_eq!(list.active_count(), 7);
        assert_eq!(list.completed_count(), 3);
    }

    #[test]
    fn test_progress_percent() {
        let mut ids = IdGen::new();
        let empty = TaskList::new();
        assert_eq!(empty.progress_percent(), 0);

        let mut list = TaskList::new()
            .add(&mut ids, "a")
            .add(&mut ids, "b")
            .add(&mut ids, "c");
        assert_eq!(list.progress_percent(), 0);

        list = list.toggle(list.tasks()[0].id);
        // 1/3 rounds to 33
        assert_eq!(list.progress_percent(), 33);

        list = list.toggle(list.tasks()[1].id);
        // 2/3 rounds to 67
        assert_eq!(list.progress_percent(), 67);

        list = list.toggle(list.tasks()[2].id);
        assert_eq!(list.progress_percent(), 100);
    }

    #[test]
    fn test_filtered_view() {
        let mut ids = IdGen::new();
        let list = TaskList::new().add(&mut ids, "open").add(&mut ids, "done");
        let list = list.toggle(list.tasks()[1].id);

        assert_eq!(list.filtered_view(ViewFilter::All).len(), 2);

        let active = list.filtered_view(ViewFilter::Active);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].text, "open");

        let completed = list.filtered_view(ViewFilter::Completed);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].text, "done");

        // Projection does not mutate stored state
        assert_eq!(list.total(), 2);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut ids = IdGen::new();
        let list = TaskList::new();

        let list = list.add(&mut ids, "Buy milk");
        assert_eq!(list.total(), 1);
        assert_eq!(list.active_count(), 1);

        let list = list.add(&mut ids, "Walk dog");
        assert_eq!(list.total(), 2);

        let milk_id = list.tasks()[0].id;
        let list = list.toggle(milk_id);
        assert_eq!(list.completed_count(), 1);
        assert_eq!(list.progress_percent(), 50);

        let completed = list.filtered_view(ViewFilter::Completed);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].text, "Buy milk");

        let list = list.clear_completed();
        assert_eq!(list.total(), 1);
        assert_eq!(list.tasks()[0].text, "Walk dog");
    }
}
