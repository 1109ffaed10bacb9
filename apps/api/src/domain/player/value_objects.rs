use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::{RosterError, RosterResult};

/// Name of a player within a group
///
/// Trimmed and never empty. Unique within its group, regardless of team.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    pub fn parse(raw: &str) -> RosterResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RosterError::validation("Player name cannot be empty"));
        }
        Ok(PlayerName(trimmed.to_string()))
    }

    /// Resolves a name that refers to an existing player
    pub fn lookup(raw: &str) -> RosterResult<Self> {
        Self::parse(raw).map_err(|_| RosterError::not_found("Player not found: (blank name)"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PlayerName::parse(&value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

/// Team label partitioning the players of a group
///
/// Stored in PostgreSQL as the `team_label` enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "team_label")]
pub enum Team {
    #[default]
    #[serde(rename = "Team A")]
    #[sqlx(rename = "Team A")]
    A,
    #[serde(rename = "Team B")]
    #[sqlx(rename = "Team B")]
    B,
}

impl Team {
    /// All labels, in the order they are offered as filters
    pub const ALL: [Team; 2] = [Team::A, Team::B];

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::A => "Team A",
            Team::B => "Team B",
        }
    }
}

impl FromStr for Team {
    type Err = RosterError;

    /// Accepts `Team A` / `Team B` in any case, or the bare letter
    ///
    /// # Example
    /// ```
    /// use roster_api::domain::player::Team;
    ///
    /// assert_eq!("team b".parse::<Team>().unwrap(), Team::B);
    /// assert_eq!(" A ".parse::<Team>().unwrap(), Team::A);
    /// assert!("Team C".parse::<Team>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let letter = normalized
            .strip_prefix("team")
            .map(str::trim_start)
            .unwrap_or(&normalized);

        match letter {
            "a" => Ok(Team::A),
            "b" => Ok(Team::B),
            _ => Err(RosterError::validation(format!("Unknown team: {}", s.trim()))),
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
