// Domain layer: the validated records and the ports the engine is built on.

pub mod model;
pub mod ports;
