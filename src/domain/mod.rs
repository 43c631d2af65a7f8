// Domain layer: certificate models and ports (interfaces).

pub mod model;
pub mod ports;
