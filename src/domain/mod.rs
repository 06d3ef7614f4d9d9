// Domain layer: core models and ports (interfaces). No I/O here; adapters live under src/adapters.

pub mod model;
pub mod ports;
