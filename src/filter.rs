// View filter: transient selection of which tasks to show

use crate::task::Task;
use clap::ValueEnum;

/// Which subset of the collection a view shows. Never persisted; every
/// session starts back at `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl ViewFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            ViewFilter::All => true,
            ViewFilter::Active => !task.completed,
            ViewFilter::Completed => task.completed,
        }
    }
}

impl std::fmt::Display for ViewFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewFilter::All => write!(f, "all"),
            ViewFilter::Active => write!(f, "active"),
            ViewFilter::Completed => write!(f, "completed"),
        }
    }
}
