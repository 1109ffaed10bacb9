use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::errors::StorageError;
use crate::domain::group::{Group, GroupName};
use crate::domain::player::{Player, PlayerName, Team};
use crate::domain::repositories::RosterRepository;

#[derive(Debug)]
struct StoredGroup {
    group: Group,
    players: Vec<Player>,
}

/// Process-local implementation of RosterRepository
///
/// Groups and players are kept in insertion order. Every mutation runs
/// under a single write lock, which makes the uniqueness checks atomic.
#[derive(Debug, Default)]
pub struct InMemoryRosterRepository {
    groups: RwLock<Vec<StoredGroup>>,
}

impl InMemoryRosterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn position(groups: &[StoredGroup], name: &GroupName) -> Option<usize> {
    groups.iter().position(|stored| stored.group.name() == name)
}

fn missing_group(name: &GroupName) -> StorageError {
    StorageError::NotFound(format!("Group not found: {}", name))
}

#[async_trait]
impl RosterRepository for InMemoryRosterRepository {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn create_group(&self, group: &Group) -> Result<(), StorageError> {
        let mut groups = self.groups.write().await;
        if position(&groups, group.name()).is_some() {
            return Err(StorageError::Duplicate(format!(
                "Group already exists: {}",
                group.name()
            )));
        }

        groups.push(StoredGroup {
            group: group.clone(),
            players: Vec::new(),
        });
        Ok(())
    }

    async fn delete_group(&self, name: &GroupName) -> Result<(), StorageError> {
        let mut groups = self.groups.write().await;
        let index = position(&groups, name).ok_or_else(|| missing_group(name))?;

        // Players live inside the stored group, so they go with it.
        groups.remove(index);
        Ok(())
    }

    async fn group_exists(&self, name: &GroupName) -> Result<bool, StorageError> {
        Ok(position(&self.groups.read().await, name).is_some())
    }

    async fn list_groups(&self) -> Result<Vec<Group>, StorageError> {
        Ok(self
            .groups
            .read()
            .await
            .iter()
            .map(|stored| stored.group.clone())
            .collect())
    }

    async fn add_player(&self, group: &GroupName, player: &Player) -> Result<(), StorageError> {
        let mut groups = self.groups.write().await;
        let index = position(&groups, group).ok_or_else(|| missing_group(group))?;
        let stored = &mut groups[index];

        if stored.players.iter().any(|p| p.name() == player.name()) {
            return Err(StorageError::Duplicate(format!(
                "Player {} already exists in group {}",
                player.name(),
                group
            )));
        }

        stored.players.push(player.clone());
        Ok(())
    }

    async fn remove_player(
        &self,
        group: &GroupName,
        player: &PlayerName,
    ) -> Result<(), StorageError> {
        let mut groups = self.groups.write().await;
        let index = position(&groups, group).ok_or_else(|| missing_group(group))?;
        let players = &mut groups[index].players;

        let before = players.len();
        players.retain(|p| p.name() != player);
        if players.len() == before {
            return Err(StorageError::NotFound(format!(
                "Player {} not found in group {}",
                player, group
            )));
        }
        Ok(())
    }

    async fn list_players(
        &self,
        group: &GroupName,
        team: Option<Team>,
    ) -> Result<Vec<Player>, StorageError> {
        let groups = self.groups.read().await;
        let index = position(&groups, group).ok_or_else(|| missing_group(group))?;

        Ok(groups[index]
            .players
            .iter()
            .filter(|p| team.map_or(true, |t| p.team() == t))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> GroupName {
        GroupName::parse(raw).unwrap()
    }

    async fn repo_with_group(raw: &str) -> InMemoryRosterRepository {
        let repo = InMemoryRosterRepository::new();
        let (group, _) = Group::new(raw).unwrap();
        repo.create_group(&group).await.unwrap();
        repo
    }

    #[tokio::test]
    async fn duplicate_group_is_reported() {
        let repo = repo_with_group("Turma").await;
        let (again, _) = Group::new("Turma").unwrap();

        let result = repo.create_group(&again).await;

        assert!(matches!(result, Err(StorageError::Duplicate(_))));
        assert_eq!(repo.list_groups().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn groups_are_listed_in_creation_order() {
        let repo = InMemoryRosterRepository::new();
        for raw in ["Zeta", "Alpha", "Mid"] {
            repo.create_group(&Group::new(raw).unwrap().0).await.unwrap();
        }

        let names: Vec<String> = repo
            .list_groups()
            .await
            .unwrap()
            .iter()
            .map(|g| g.name().to_string())
            .collect();

        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[tokio::test]
    async fn delete_missing_group_is_not_found() {
        let repo = InMemoryRosterRepository::new();

        let result = repo.delete_group(&name("Ghost")).await;

        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn add_player_to_missing_group_is_not_found() {
        let repo = InMemoryRosterRepository::new();
        let player = Player::new("Bob", Team::A).unwrap();

        let result = repo.add_player(&name("Ghost"), &player).await;

        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn same_player_name_in_other_group_is_allowed() {
        let repo = repo_with_group("One").await;
        repo.create_group(&Group::new("Two").unwrap().0).await.unwrap();

        repo.add_player(&name("One"), &Player::new("Bob", Team::A).unwrap())
            .await
            .unwrap();
        repo.add_player(&name("Two"), &Player::new("Bob", Team::A).unwrap())
            .await
            .unwrap();

        assert_eq!(repo.list_players(&name("Two"), None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_players_filters_by_team_in_insertion_order() {
        let repo = repo_with_group("Turma").await;
        for (player, team) in [("Carol", Team::A), ("Alice", Team::B), ("Bob", Team::A)] {
            repo.add_player(&name("Turma"), &Player::new(player, team).unwrap())
                .await
                .unwrap();
        }

        let team_a: Vec<String> = repo
            .list_players(&name("Turma"), Some(Team::A))
            .await
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();

        assert_eq!(team_a, vec!["Carol", "Bob"]);
        assert_eq!(repo.list_players(&name("Turma"), None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn remove_missing_player_is_not_found() {
        let repo = repo_with_group("Turma").await;

        let result = repo
            .remove_player(&name("Turma"), &PlayerName::parse("Nobody").unwrap())
            .await;

        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn concurrent_duplicate_adds_keep_one_player() {
        let repo = std::sync::Arc::new(repo_with_group("Turma").await);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                let player = Player::new("Bob", Team::A).unwrap();
                repo.add_player(&GroupName::parse("Turma").unwrap(), &player)
                    .await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.list_players(&name("Turma"), None).await.unwrap().len(), 1);
    }
}
