pub mod command;
pub mod service_controller;

pub use command::run_command;
pub use service_controller::{SimulatedServiceController, SystemServiceController};
