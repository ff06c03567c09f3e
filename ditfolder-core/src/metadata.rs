//! Shoot metadata: the structured input the folder name is derived from.
//!
//! `ShootMetadata` is a plain value. It is built once from operator input,
//! validated, and then handed to the naming functions by reference.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult};

/// Shoot-unit tag.
///
/// Any string parses. Values outside the known set are kept verbatim in
/// `Other` and get no special naming treatment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Main unit
    #[default]
    Main,
    /// Second unit
    Second,
    /// CG / visual-effects unit
    Cg,
    /// Test shoot
    Test,
    Other(String),
}

impl Unit {
    pub fn as_str(&self) -> &str {
        match self {
            Unit::Main => "MU",
            Unit::Second => "2U",
            Unit::Cg => "CG",
            Unit::Test => "TEST",
            Unit::Other(tag) => tag,
        }
    }
}

impl FromStr for Unit {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "MU" => Unit::Main,
            "2U" => Unit::Second,
            "CG" => Unit::Cg,
            "TEST" => Unit::Test,
            other => Unit::Other(other.to_string()),
        })
    }
}

impl From<&str> for Unit {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(unit) => unit,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata describing one shoot day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShootMetadata {
    /// 3-letter production code, stored uppercased
    pub showcode: String,
    /// Episode code; empty when the production has no episodes
    pub episode: String,
    /// Day label, e.g. "Day003"
    pub day: String,
    pub unit: Unit,
    /// CG number; only used when `unit` is `CG`
    pub cg_number: String,
    pub date: NaiveDate,
}

impl ShootMetadata {
    /// Creates metadata for `showcode` on `date`. The showcode is uppercased.
    pub fn new(showcode: &str, date: NaiveDate, unit: Unit, day: &str) -> Self {
        Self {
            showcode: showcode.to_uppercase(),
            episode: String::new(),
            day: day.to_string(),
            unit,
            cg_number: String::new(),
            date,
        }
    }

    pub fn with_episode(mut self, episode: &str) -> Self {
        self.episode = episode.to_string();
        self
    }

    pub fn with_cg_number(mut self, cg_number: &str) -> Self {
        self.cg_number = cg_number.to_string();
        self
    }

    /// Checks the fields the folder name is built from.
    ///
    /// All problems are collected so the operator can fix them in one pass.
    pub fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();

        if self.showcode.chars().count() != 3
            || !self.showcode.chars().all(|c| c.is_ascii_alphabetic())
        {
            errors.push("Showcode must be exactly 3 letters".to_string());
        }

        if self.day.is_empty() {
            errors.push("Day is required".to_string());
        } else if !is_name_safe(&self.day) {
            errors.push(
                "Day contains invalid characters (only letters, numbers, and underscores allowed)"
                    .to_string(),
            );
        }

        if !self.episode.is_empty() && !is_name_safe(&self.episode) {
            errors.push(
                "Episode contains invalid characters (only letters, numbers, and underscores allowed)"
                    .to_string(),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidMetadata(errors))
        }
    }
}

/// Checks a project name: required, letters, numbers, spaces and underscores.
pub fn validate_project_name(name: &str) -> CoreResult<()> {
    if name.is_empty() {
        return Err(CoreError::InvalidMetadata(vec![
            "Project name is required".to_string(),
        ]));
    }
    if !is_name_safe(name) {
        return Err(CoreError::InvalidMetadata(vec![
            "Project name contains invalid characters (only letters, numbers, spaces, and underscores allowed)"
                .to_string(),
        ]));
    }
    Ok(())
}

fn is_name_safe(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == ' ')
}
