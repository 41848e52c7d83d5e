//! Feciaq — work submissions.
//!
//! Responsible for turning a raw conference work submission into either an
//! ordered list of rule violations or a persisted work with its authors,
//! and for listing works by subject area.

pub mod application;
pub mod domain;
