use serde::{Deserialize, Serialize};

/// Registration metadata for a task. Used for lookup and listing only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInfo {
    pub name: String,
    pub description: String,
    pub group: String,
}

impl TaskInfo {
    pub fn new(name: &str, description: &str, group: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            group: group.to_string(),
        }
    }
}
