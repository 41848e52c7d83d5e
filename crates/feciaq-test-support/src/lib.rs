//! Shared test doubles and fixtures for the Feciaq work registry.

mod clock;
pub mod fixtures;
mod repository;

pub use clock::FixedClock;
pub use repository::{FailingWorkRepository, RecordingWorkRepository};
