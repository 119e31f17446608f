// Domain layer: capability traits (ports) and the concrete variants that satisfy them.

pub mod model;
pub mod ports;
