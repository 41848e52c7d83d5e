//! Validation rules for work submissions.
//!
//! Every rule is evaluated, so a single response lists all violations.
//! Messages come out in a fixed order: title, area, code, author count,
//! then the per-author checks in author order.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use feciaq_core::error::DomainError;
use feciaq_core::model::{Area, Gender, NewAuthor, NewWork};
use regex::Regex;

use super::submission::{AuthorSubmission, WorkSubmission};

/// Allowed number of authors per work.
pub const AUTHOR_COUNT: RangeInclusive<usize> = 2..=7;

pub const TITLE_EMPTY: &str = "title must not be empty";
pub const AREA_INVALID: &str = "area must be one of: CAE, CET, CBS, CHCSA, MDIS";
pub const CODE_INVALID: &str = "code must be the area's 3-letter prefix followed by 2 digits";
pub const AUTHOR_COUNT_INVALID: &str = "work must have between 2 and 7 authors";
pub const AUTHOR_NAME_INVALID: &str = "author names must include first and last name";
pub const AUTHOR_GENDER_INVALID: &str = "author gender must be M or F";
pub const AUTHOR_NATIONAL_ID_INVALID: &str =
    "author national id must be exactly 11 digits with no punctuation";
/// Returned by the area lookup for an unknown area code.
pub const AREA_LOOKUP_INVALID: &str = "invalid area";

// ASCII classes on purpose: `\d` would also match non-ASCII digits.
static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}[0-9]{2}$").expect("code pattern compiles"));
static NATIONAL_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{11}$").expect("national id pattern compiles"));

/// Fields of a submission that passed every rule.
struct Accepted {
    title: String,
    area: Area,
    code: String,
    authors: Vec<NewAuthor>,
}

/// Returns every rule the submission violates, in reporting order.
///
/// An empty list means the submission is accepted.
#[must_use]
pub fn validation_errors(submission: &WorkSubmission) -> Vec<String> {
    check(submission).err().unwrap_or_default()
}

/// Validates a submission and, if it passes, converts it into a `NewWork`
/// stamped with `submitted_at`.
///
/// # Errors
///
/// Returns `DomainError::ValidationFailed` with the ordered list of
/// violated rules.
pub fn validate(
    submission: &WorkSubmission,
    submitted_at: DateTime<Utc>,
) -> Result<NewWork, DomainError> {
    let accepted = check(submission).map_err(DomainError::ValidationFailed)?;
    Ok(NewWork {
        title: accepted.title,
        area: accepted.area,
        code: accepted.code,
        submitted_at,
        authors: accepted.authors,
    })
}

/// Parses an area code for the area lookup.
///
/// # Errors
///
/// Returns `DomainError::ValidationFailed` with `"invalid area"` when the
/// code is not one of the fixed areas.
pub fn parse_area(code: &str) -> Result<Area, DomainError> {
    Area::parse(code).ok_or_else(|| DomainError::validation(AREA_LOOKUP_INVALID))
}

fn check(submission: &WorkSubmission) -> Result<Accepted, Vec<String>> {
    let mut errors = Vec::new();

    let title = submission
        .title
        .as_deref()
        .filter(|title| !title.trim().is_empty());
    if title.is_none() {
        errors.push(TITLE_EMPTY.to_owned());
    }

    let area = submission.area.as_deref().and_then(Area::parse);
    if area.is_none() {
        errors.push(AREA_INVALID.to_owned());
    }

    let code = submission
        .code
        .as_deref()
        .filter(|code| CODE_PATTERN.is_match(code));
    if code.is_none() {
        errors.push(CODE_INVALID.to_owned());
    }

    let authors = match &submission.authors {
        Some(authors) => {
            if !AUTHOR_COUNT.contains(&authors.len()) {
                errors.push(AUTHOR_COUNT_INVALID.to_owned());
            }
            let checked: Vec<Option<NewAuthor>> = authors
                .iter()
                .map(|author| check_author(author, &mut errors))
                .collect();
            checked.into_iter().collect::<Option<Vec<_>>>()
        }
        None => {
            errors.push(AUTHOR_COUNT_INVALID.to_owned());
            None
        }
    };

    match (title, area, code, authors) {
        (Some(title), Some(area), Some(code), Some(authors)) if errors.is_empty() => Ok(Accepted {
            title: title.to_owned(),
            area,
            code: code.to_owned(),
            authors,
        }),
        _ => Err(errors),
    }
}

fn check_author(author: &AuthorSubmission, errors: &mut Vec<String>) -> Option<NewAuthor> {
    let name = author
        .name
        .as_deref()
        .filter(|name| name.split_whitespace().count() >= 2);
    if name.is_none() {
        errors.push(AUTHOR_NAME_INVALID.to_owned());
    }

    let gender = author.gender.as_deref().and_then(Gender::parse);
    if gender.is_none() {
        errors.push(AUTHOR_GENDER_INVALID.to_owned());
    }

    let national_id = author
        .national_id
        .as_deref()
        .filter(|id| NATIONAL_ID_PATTERN.is_match(id));
    if national_id.is_none() {
        errors.push(AUTHOR_NATIONAL_ID_INVALID.to_owned());
    }

    Some(NewAuthor {
        name: name?.to_owned(),
        gender: gender?,
        national_id: national_id?.to_owned(),
    })
}
