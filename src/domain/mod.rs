// Domain layer: the device record shape and the ports the pipeline talks through.

pub mod model;
pub mod ports;
