//! Command handlers for the works context.
//!
//! A submission moves `Received → Validated → Persisted`, or stops at
//! `Rejected` when a rule fails, or at `PersistenceFailed` when the store
//! does. Nothing is retried here; the caller decides whether to resubmit.

use feciaq_core::clock::Clock;
use feciaq_core::command::Command;
use feciaq_core::error::DomainError;
use feciaq_core::model::Work;
use feciaq_core::repository::WorkRepository;
use tracing::{debug, error, info};

use crate::domain::commands::SubmitWork;
use crate::domain::validation;

/// Handles the `SubmitWork` command: validates the submission and, only if
/// every rule passes, persists the work and its authors in one transaction.
///
/// Submitting the same payload twice creates two distinct works.
///
/// # Errors
///
/// Returns `DomainError::ValidationFailed` without touching the repository
/// if any rule is violated, or `DomainError::InternalFailure` if persisting
/// fails.
pub async fn handle_submit_work(
    command: &SubmitWork,
    clock: &dyn Clock,
    repo: &dyn WorkRepository,
) -> Result<Work, DomainError> {
    let new_work = match validation::validate(&command.submission, clock.now()) {
        Ok(new_work) => new_work,
        Err(err) => {
            debug!(
                command_type = command.command_type(),
                correlation_id = %command.correlation_id(),
                error = %err,
                "submission rejected"
            );
            return Err(err);
        }
    };

    let work = repo.create_work(&new_work).await.inspect_err(|err| {
        error!(
            correlation_id = %command.correlation_id(),
            error = %err,
            "failed to persist work"
        );
    })?;

    info!(
        correlation_id = %command.correlation_id(),
        work_id = %work.id,
        area = %work.area,
        author_count = work.authors.len(),
        "work persisted"
    );

    Ok(work)
}
