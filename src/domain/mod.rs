// Domain layer: course model, the store port and the use cases built on it.

pub mod model;
pub mod ports;

pub mod services;
