use crate::core::knows::KnowsTask;
use crate::domain::model::TaskInfo;
use crate::domain::ports::{Task, TaskContext};
use crate::utils::error::{Result, ShadowError};
use std::collections::BTreeMap;
use std::time::Instant;

/// Name-indexed table of runnable tasks.
#[derive(Default)]
pub struct TaskRegistry {
    tasks: BTreeMap<String, Box<dyn Task>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.tasks.insert(KnowsTask::NAME.to_string(), Box::new(KnowsTask));
        registry
    }

    pub fn register<T: Task + 'static>(&mut self, task: T) -> Result<()> {
        let name = task.info().name;
        if self.tasks.contains_key(&name) {
            return Err(ShadowError::DuplicateTask { name });
        }
        tracing::debug!("Registered task '{}'", name);
        self.tasks.insert(name, Box::new(task));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Task> {
        self.tasks.get(name).map(|task| task.as_ref())
    }

    /// Metadata of every task, ordered by name.
    pub fn list(&self) -> Vec<TaskInfo> {
        self.tasks.values().map(|task| task.info()).collect()
    }

    pub fn run(&self, name: &str, ctx: &TaskContext<'_>) -> Result<()> {
        let task = self.get(name).ok_or_else(|| ShadowError::UnknownTask {
            name: name.to_string(),
        })?;

        let started = Instant::now();
        tracing::debug!("Running task '{}'", name);
        let result = task.run(ctx);
        match &result {
            Ok(()) => tracing::debug!("Task '{}' finished in {:?}", name, started.elapsed()),
            Err(e) => {
                tracing::debug!("Task '{}' failed after {:?}: {}", name, started.elapsed(), e)
            }
        }
        result
    }
}
