//! Model types shared by the submission pipeline and the storage layer.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject area a work is classified under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Area {
    /// Ciências Agrárias e Engenharias.
    Cae,
    /// Ciências Exatas e Tecnológicas.
    Cet,
    /// Ciências Biológicas e da Saúde.
    Cbs,
    /// Ciências Humanas, Sociais Aplicadas, Linguística, Letras e Artes.
    Chcsa,
    /// Multidisciplinar.
    Mdis,
}

impl Area {
    /// Every area, in the order they are listed to users.
    pub const ALL: [Area; 5] = [Area::Cae, Area::Cet, Area::Cbs, Area::Chcsa, Area::Mdis];

    /// The wire and storage code for this area.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Area::Cae => "CAE",
            Area::Cet => "CET",
            Area::Cbs => "CBS",
            Area::Chcsa => "CHCSA",
            Area::Mdis => "MDIS",
        }
    }

    /// Parses an exact area code. Matching is case-sensitive.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|area| area.as_str() == code)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender code recorded for an author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// `M`
    #[serde(rename = "M")]
    Male,
    /// `F`
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// The wire and storage code for this gender.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }

    /// Parses an exact gender code (`M` or `F`).
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An author that passed validation and has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    /// Full name, at least given and family name.
    pub name: String,
    /// Gender code.
    pub gender: Gender,
    /// Eleven-digit national identifier.
    pub national_id: String,
}

/// A work that passed validation and has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWork {
    /// Work title.
    pub title: String,
    /// Subject area.
    pub area: Area,
    /// Work code, e.g. `CAE01`.
    pub code: String,
    /// When the submission was accepted.
    pub submitted_at: DateTime<Utc>,
    /// Authors in submission order.
    pub authors: Vec<NewAuthor>,
}

/// A persisted author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Identity assigned by the store.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Gender code.
    pub gender: Gender,
    /// Eleven-digit national identifier.
    pub national_id: String,
}

/// A persisted work with its authors resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    /// Identity assigned by the store.
    pub id: Uuid,
    /// Work title.
    pub title: String,
    /// Subject area.
    pub area: Area,
    /// Work code.
    pub code: String,
    /// When the submission was accepted.
    pub submitted_at: DateTime<Utc>,
    /// Authors in submission order.
    pub authors: Vec<Author>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_parse_accepts_every_code() {
        for area in Area::ALL {
            assert_eq!(Area::parse(area.as_str()), Some(area));
        }
    }

    #[test]
    fn test_area_parse_rejects_unknown_and_lowercase_codes() {
        assert_eq!(Area::parse("Saude"), None);
        assert_eq!(Area::parse("cae"), None);
        assert_eq!(Area::parse(""), None);
    }

    #[test]
    fn test_area_serializes_as_uppercase_code() {
        let json = serde_json::to_value(Area::Chcsa).unwrap();

        assert_eq!(json, serde_json::json!("CHCSA"));
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("M"), Some(Gender::Male));
        assert_eq!(Gender::parse("F"), Some(Gender::Female));
        assert_eq!(Gender::parse("m"), None);
        assert_eq!(Gender::parse("X"), None);
    }

    #[test]
    fn test_author_serializes_with_camel_case_keys() {
        let author = Author {
            id: Uuid::nil(),
            name: "Ana Silva".to_owned(),
            gender: Gender::Female,
            national_id: "12345678901".to_owned(),
        };

        let json = serde_json::to_value(&author).unwrap();

        assert_eq!(json["nationalId"], "12345678901");
        assert_eq!(json["gender"], "F");
    }
}
