//! Work repository abstraction.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::model::{Area, NewWork, Work};

/// Repository trait for persisting and reading works.
///
/// Implementations own the storage handle they were constructed with; no
/// operation reaches for process-wide state.
#[async_trait]
pub trait WorkRepository: Send + Sync {
    /// Persist a work together with its authors in one atomic unit.
    ///
    /// Authors are inserted in the order given and the returned `Work`
    /// lists them in that same order. On any failure nothing is persisted.
    async fn create_work(&self, work: &NewWork) -> Result<Work, DomainError>;

    /// Load every work classified under `area`, with its authors resolved.
    async fn find_works_by_area(&self, area: Area) -> Result<Vec<Work>, DomainError>;
}
