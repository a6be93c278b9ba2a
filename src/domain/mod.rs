// Domain layer: ranking models and the fetch port.

pub mod model;
pub mod ports;
