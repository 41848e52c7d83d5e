//! Test repositories — mock `WorkRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use feciaq_core::error::DomainError;
use feciaq_core::model::{Area, Author, NewWork, Work};
use feciaq_core::repository::WorkRepository;
use uuid::Uuid;

/// An in-memory work repository that assigns fresh identities on every
/// `create_work` call and records the `NewWork` it was given.
#[derive(Debug, Default)]
pub struct RecordingWorkRepository {
    created: Mutex<Vec<NewWork>>,
    works: Mutex<Vec<Work>>,
}

impl RecordingWorkRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every `NewWork` passed to `create_work`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn created_works(&self) -> Vec<NewWork> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorkRepository for RecordingWorkRepository {
    async fn create_work(&self, work: &NewWork) -> Result<Work, DomainError> {
        self.created.lock().unwrap().push(work.clone());

        let persisted = Work {
            id: Uuid::new_v4(),
            title: work.title.clone(),
            area: work.area,
            code: work.code.clone(),
            submitted_at: work.submitted_at,
            authors: work
                .authors
                .iter()
                .map(|author| Author {
                    id: Uuid::new_v4(),
                    name: author.name.clone(),
                    gender: author.gender,
                    national_id: author.national_id.clone(),
                })
                .collect(),
        };
        self.works.lock().unwrap().push(persisted.clone());
        Ok(persisted)
    }

    async fn find_works_by_area(&self, area: Area) -> Result<Vec<Work>, DomainError> {
        Ok(self
            .works
            .lock()
            .unwrap()
            .iter()
            .filter(|work| work.area == area)
            .cloned()
            .collect())
    }
}

/// A work repository that always returns an internal failure. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingWorkRepository;

#[async_trait]
impl WorkRepository for FailingWorkRepository {
    async fn create_work(&self, _work: &NewWork) -> Result<Work, DomainError> {
        Err(DomainError::InternalFailure("connection refused".into()))
    }

    async fn find_works_by_area(&self, _area: Area) -> Result<Vec<Work>, DomainError> {
        Err(DomainError::InternalFailure("connection refused".into()))
    }
}
