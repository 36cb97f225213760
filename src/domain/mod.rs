// Domain layer: request-scoped models and ports. No external dependencies beyond std/serde.

pub mod categories;
pub mod model;
pub mod ports;
