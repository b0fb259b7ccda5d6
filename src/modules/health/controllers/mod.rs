mod health_controller;

pub use health_controller::{configure, configure_readiness, health_check, readiness_check};
