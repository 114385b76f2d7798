// Task record and time source

use serde::{Deserialize, Serialize};

/// One user-entered task. `id` and `created_at` are assigned at creation and
/// never change; `completed` flips via toggle. The serialized field name
/// `createdAt` is the persisted shape and must not drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// Current timestamp in milliseconds since the Unix epoch
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before Unix epoch")
        .as_millis() as i64
}
