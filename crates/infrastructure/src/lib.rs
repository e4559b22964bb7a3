//! Netpanel Infrastructure Layer
pub mod bind;
pub mod system;

pub use bind::{FsArtifactStore, NamedChecker, SimulatedChecker};
pub use system::{SimulatedServiceController, SystemServiceController};
