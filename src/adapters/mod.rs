// Adapters layer: concrete resource sources and log sinks.

pub mod resources;
pub mod sink;

pub use resources::{DirectoryResources, EmbeddedResources};
pub use sink::{MemorySink, TracingSink};
