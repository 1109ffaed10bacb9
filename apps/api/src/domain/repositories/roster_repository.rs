use async_trait::async_trait;

use crate::domain::errors::StorageError;
use crate::domain::group::{Group, GroupName};
use crate::domain::player::{Player, PlayerName, Team};

/// Storage adapter for groups and the players they own
///
/// Implementations are responsible for atomicity: a duplicate group name,
/// or a duplicate player name within a group, must be reported as
/// `StorageError::Duplicate` even when two writers race.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Short name of the backend, used in logs
    fn backend(&self) -> &'static str;

    /// Persist a new group
    ///
    /// Fails with `Duplicate` if a group with the same name exists.
    async fn create_group(&self, group: &Group) -> Result<(), StorageError>;

    /// Delete a group and every player in it
    ///
    /// Fails with `NotFound` if the group does not exist.
    async fn delete_group(&self, name: &GroupName) -> Result<(), StorageError>;

    async fn group_exists(&self, name: &GroupName) -> Result<bool, StorageError>;

    /// All groups in creation order
    async fn list_groups(&self) -> Result<Vec<Group>, StorageError>;

    /// Attach a player to a group
    ///
    /// Fails with `NotFound` if the group is absent and with `Duplicate` if
    /// the player's name is already taken in that group.
    async fn add_player(&self, group: &GroupName, player: &Player) -> Result<(), StorageError>;

    /// Delete a player by name, whatever its team
    async fn remove_player(
        &self,
        group: &GroupName,
        player: &PlayerName,
    ) -> Result<(), StorageError>;

    /// Players of a group in insertion order, optionally restricted to one team
    ///
    /// Fails with `NotFound` if the group does not exist.
    async fn list_players(
        &self,
        group: &GroupName,
        team: Option<Team>,
    ) -> Result<Vec<Player>, StorageError>;
}
