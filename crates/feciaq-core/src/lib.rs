//! Feciaq Core — shared domain abstractions.
//!
//! This crate defines the model types, the repository seam and the error
//! type that every other crate in the workspace depends on. It contains no
//! infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod model;
pub mod repository;
