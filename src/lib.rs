// taskpad - offline-first task list persisted to a single local JSON slot

pub mod connectivity;
pub mod filter;
pub mod list;
pub mod session;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use connectivity::{ConnectivityEvent, ConnectivityEvents, ConnectivityMonitor, LinkState};
pub use filter::ViewFilter;
pub use list::{IdGen, TaskList};
pub use session::Session;
pub use store::Store;
pub use task::{Task, now_ms};
