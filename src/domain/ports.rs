use crate::domain::model::TaskInfo;
use crate::utils::error::Result;
use tracing::Level;

/// Destination for the messages a task emits.
pub trait LogSink: Send + Sync {
    fn emit(&self, level: Level, message: &str);
}

/// Resolves a logical resource path such as `/shadowBanner.txt` to its text.
pub trait ResourceSource: Send + Sync {
    fn read_text(&self, path: &str) -> Result<String>;
}

/// Everything a task may touch during one invocation.
#[derive(Clone, Copy)]
pub struct TaskContext<'a> {
    pub resources: &'a dyn ResourceSource,
    pub sink: &'a dyn LogSink,
}

impl<'a> TaskContext<'a> {
    pub fn new(resources: &'a dyn ResourceSource, sink: &'a dyn LogSink) -> Self {
        Self { resources, sink }
    }

    pub fn info(&self, message: &str) {
        self.sink.emit(Level::INFO, message);
    }
}

pub trait Task: Send + Sync {
    fn info(&self) -> TaskInfo;
    fn run(&self, ctx: &TaskContext<'_>) -> Result<()>;
}
