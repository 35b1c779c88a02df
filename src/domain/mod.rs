// Domain layer: the host's file shapes and the two ports (host-facing provider, backend-facing store).

pub mod model;
pub mod ports;
