pub mod artifact_store;
pub mod checker;

pub use artifact_store::FsArtifactStore;
pub use checker::{NamedChecker, SimulatedChecker};
