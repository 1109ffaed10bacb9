use std::sync::Arc;

use super::classify;
use crate::domain::errors::{RosterError, RosterResult, StorageError};
use crate::domain::events::RosterEvent;
use crate::domain::group::GroupName;
use crate::domain::player::{Player, PlayerName, Team};
use crate::domain::repositories::RosterRepository;

/// Adds, removes and lists the players of a group
///
/// The team filter and group are explicit arguments; the lifecycle keeps
/// no per-caller state.
#[derive(Clone)]
pub struct PlayerLifecycle {
    repository: Arc<dyn RosterRepository>,
}

impl PlayerLifecycle {
    pub fn new(repository: Arc<dyn RosterRepository>) -> Self {
        Self { repository }
    }

    async fn existing_group(&self, raw: &str) -> RosterResult<GroupName> {
        let group = GroupName::lookup(raw)?;
        if !self.repository.group_exists(&group).await.map_err(classify)? {
            return Err(group_not_found(&group));
        }
        Ok(group)
    }

    /// Adds a player to a group under the given team
    ///
    /// # Errors
    /// Checked in this order:
    /// * `NotFound` - If the group does not exist
    /// * `Validation` - If the trimmed player name is empty
    /// * `Conflict` - If the name is already taken in this group, on any team
    #[tracing::instrument(skip(self))]
    pub async fn add_player(&self, group: &str, player: &str, team: Team) -> RosterResult<Player> {
        let group = self.existing_group(group).await?;
        let player = Player::new(player, team)?;

        self.repository
            .add_player(&group, &player)
            .await
            .map_err(|e| match e {
                StorageError::Duplicate(_) => RosterError::conflict(format!(
                    "A player named {} already exists in {}",
                    player.name(),
                    group
                )),
                StorageError::NotFound(_) => group_not_found(&group),
                other => classify(other),
            })?;

        RosterEvent::PlayerAdded {
            group,
            player_id: player.id(),
            player: player.name().clone(),
            team,
        }
        .record();
        Ok(player)
    }

    /// Removes a player by name, whichever team it is on
    ///
    /// # Errors
    /// * `NotFound` - If the group, or the player within it, does not exist
    #[tracing::instrument(skip(self))]
    pub async fn remove_player(&self, group: &str, player: &str) -> RosterResult<()> {
        let group = GroupName::lookup(group)?;
        let player = PlayerName::lookup(player)?;

        self.repository
            .remove_player(&group, &player)
            .await
            .map_err(classify)?;

        RosterEvent::PlayerRemoved { group, player }.record();
        Ok(())
    }

    /// Players of one team, in the order they were added
    pub async fn list_players_by_team(&self, group: &str, team: Team) -> RosterResult<Vec<Player>> {
        let group = GroupName::lookup(group)?;
        self.repository
            .list_players(&group, Some(team))
            .await
            .map_err(classify)
    }

    /// Every player of the group, in the order they were added
    pub async fn list_players(&self, group: &str) -> RosterResult<Vec<Player>> {
        let group = GroupName::lookup(group)?;
        self.repository
            .list_players(&group, None)
            .await
            .map_err(classify)
    }
}

fn group_not_found(group: &GroupName) -> RosterError {
    RosterError::not_found(format!("Group not found: {}", group))
}
