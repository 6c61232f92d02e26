pub mod knows;
pub mod registry;

pub use crate::domain::model::TaskInfo;
pub use crate::domain::ports::{LogSink, ResourceSource, Task, TaskContext};
pub use crate::utils::error::Result;
