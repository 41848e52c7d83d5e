//! Submission payloads and seed data.

use chrono::{DateTime, Utc};
use feciaq_core::model::{Area, Gender, NewAuthor, NewWork};
use serde_json::{Value, json};

const GIVEN_NAMES: [&str; 10] = [
    "Ana", "Joao", "Maria", "Pedro", "Carla", "Lucas", "Beatriz", "Rafael", "Julia", "Tiago",
];
const FAMILY_NAMES: [&str; 10] = [
    "Silva", "Souza", "Oliveira", "Santos", "Lima", "Costa", "Pereira", "Almeida", "Ferreira",
    "Rocha",
];

/// The accepted submission used across tests: a CAE work with two authors.
#[must_use]
pub fn valid_work_payload() -> Value {
    json!({
        "title": "Effects of X",
        "area": "CAE",
        "code": "CAE01",
        "authors": [
            { "name": "Ana Silva", "gender": "F", "nationalId": "12345678901" },
            { "name": "Joao Souza", "gender": "M", "nationalId": "10987654321" }
        ]
    })
}

/// A valid payload apart from having `count` generated authors.
#[must_use]
pub fn work_payload_with_authors(count: usize) -> Value {
    let mut payload = valid_work_payload();
    payload["authors"] = Value::Array(
        (0..count)
            .map(|index| {
                let author = seed_author(index);
                json!({
                    "name": author.name,
                    "gender": author.gender.as_str(),
                    "nationalId": author.national_id,
                })
            })
            .collect(),
    );
    payload
}

/// Generates `per_area` works for every area, each with two authors.
///
/// Codes follow the `<AREA><NN>` convention, numbered from `01` within
/// each area. `per_area` must stay below 100.
#[must_use]
pub fn seed_works(per_area: usize, submitted_at: DateTime<Utc>) -> Vec<NewWork> {
    Area::ALL
        .into_iter()
        .enumerate()
        .flat_map(|(area_index, area)| {
            (0..per_area).map(move |number| NewWork {
                title: format!("Study {} of {area}", number + 1),
                area,
                code: format!("{}{:02}", prefix(area), number + 1),
                submitted_at,
                authors: vec![seed_author(area_index * 2), seed_author(area_index * 2 + 1)],
            })
        })
        .collect()
}

/// Deterministic author number `index`.
#[must_use]
pub fn seed_author(index: usize) -> NewAuthor {
    NewAuthor {
        name: format!(
            "{} {}",
            GIVEN_NAMES[index % GIVEN_NAMES.len()],
            FAMILY_NAMES[(index / GIVEN_NAMES.len()) % FAMILY_NAMES.len()]
        ),
        gender: if index % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        },
        national_id: format!("{:011}", 10_000_000_000_u64 + index as u64),
    }
}

// Codes are three letters; CHCSA and MDIS are truncated.
fn prefix(area: Area) -> &'static str {
    &area.as_str()[..3]
}
