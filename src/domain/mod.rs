// Domain layer: the Person model and the ports (traits) it is used through.

pub mod model;
pub mod ports;
