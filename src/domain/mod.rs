// Domain layer: data model and ports. No dependency on config or the CLI.

pub mod model;
pub mod ports;
