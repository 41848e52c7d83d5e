//! Query handlers for the works context.

use feciaq_core::error::DomainError;
use feciaq_core::model::Work;
use feciaq_core::repository::WorkRepository;

use crate::domain::validation;

/// Lists every work registered under `area_code`.
///
/// The code is checked before any storage access.
///
/// # Errors
///
/// Returns `DomainError::ValidationFailed` with `"invalid area"` for an
/// unknown code, or `DomainError::InternalFailure` if the read fails.
pub async fn list_works_by_area(
    area_code: &str,
    repo: &dyn WorkRepository,
) -> Result<Vec<Work>, DomainError> {
    let area = validation::parse_area(area_code)?;
    repo.find_works_by_area(area).await
}
