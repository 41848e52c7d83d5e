//! Feciaq Store — `PostgreSQL` persistence for works and authors.
//!
//! The schema lives in the workspace `migrations/` directory.

pub mod pg_work_repository;
