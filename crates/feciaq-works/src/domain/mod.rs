//! Domain layer: the submission record, commands and validation rules.

pub mod commands;
pub mod submission;
pub mod validation;
