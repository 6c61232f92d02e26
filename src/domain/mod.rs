// Domain layer: task metadata and the ports a task runs against.

pub mod model;
pub mod ports;
