use super::value_objects::{PlayerName, Team};
use crate::domain::errors::RosterResult;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A person in a group, assigned to one team
#[derive(Debug, Clone)]
pub struct Player {
    id: Uuid,
    name: PlayerName,
    team: Team,
    created_at: DateTime<Utc>,
}

impl Player {
    /// Creates a player that is not yet attached to any group
    ///
    /// # Returns
    /// * `Err(RosterError::Validation)` - If the trimmed name is empty
    pub fn new(name: &str, team: Team) -> RosterResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: PlayerName::parse(name)?,
            team,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Player from stored data
    ///
    /// Only for storage adapters.
    pub fn from_persistence(
        id: Uuid,
        name: PlayerName,
        team: Team,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            team,
            created_at,
        }
    }
}
