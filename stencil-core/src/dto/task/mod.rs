//! Task DTOs returned by asynchronous write endpoints

use serde::{Deserialize, Serialize};

/// Reference to the orchestration task started by a write request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRef {
    /// Task path, e.g. `/tasks/01HX...`
    #[serde(rename = "ref")]
    pub reference: String,
}

impl TaskRef {
    /// Task ID, the last path segment of the reference
    pub fn task_id(&self) -> &str {
        self.reference
            .rsplit('/')
            .next()
            .unwrap_or(self.reference.as_str())
    }
}
