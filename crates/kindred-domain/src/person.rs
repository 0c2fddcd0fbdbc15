//! Person module - the vertices of the family graph

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a person
///
/// Identifiers are opaque strings owned by the persistence collaborator.
/// Newly created people get a UUIDv7 string so ids sort chronologically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Generate a new UUIDv7-based PersonId
    ///
    /// # Examples
    ///
    /// ```
    /// use kindred_domain::PersonId;
    ///
    /// let id = PersonId::new();
    /// assert_eq!(id.as_str().len(), 36);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PersonId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Gender as recorded on a profile
///
/// Only used to pick gendered label forms. It never decides whether two
/// people are related.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Female
    Female,
    /// Male
    Male,
}

impl Gender {
    /// Get the gender name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "female" | "f" => Ok(Gender::Female),
            "male" | "m" => Ok(Gender::Male),
            _ => Err(format!("Invalid gender: {}", s)),
        }
    }
}

/// A family member
///
/// The engine treats people as read-only input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Gender, when recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// Birth date as an ISO date string, when recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    /// Preferred display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Person {
    /// Create a person with only the required fields
    pub fn new(id: impl Into<PersonId>, first_name: &str, last_name: &str) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            gender: None,
            birth_date: None,
            display_name: None,
        }
    }

    /// Set the gender
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set the birth date (ISO string, parsed lazily)
    pub fn with_birth_date(mut self, birth_date: &str) -> Self {
        self.birth_date = Some(birth_date.to_string());
        self
    }

    /// Set the display name
    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.display_name = Some(display_name.to_string());
        self
    }

    /// "First Last", trimmed when either part is empty
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Display name if set, otherwise the full name
    pub fn name(&self) -> String {
        match &self.display_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => self.full_name(),
        }
    }

    /// Parse the birth date
    ///
    /// Accepts `YYYY-MM-DD` and RFC 3339 timestamps. Anything else, including
    /// a missing value, is `None`: an unknown date is never guessed.
    pub fn parsed_birth_date(&self) -> Option<NaiveDate> {
        let raw = self.birth_date.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }
}
