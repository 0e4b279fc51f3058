// Domain layer: trip model and ports (interfaces).

pub mod model;
pub mod ports;
