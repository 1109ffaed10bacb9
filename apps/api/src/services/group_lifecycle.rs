use std::sync::Arc;

use super::classify;
use crate::domain::errors::{RosterError, RosterResult, StorageError};
use crate::domain::events::RosterEvent;
use crate::domain::group::{Group, GroupName};
use crate::domain::repositories::RosterRepository;

/// Creates, removes and lists groups
///
/// Holds no state besides the storage adapter handle, so clones are cheap
/// and can be shared between request handlers.
#[derive(Clone)]
pub struct GroupLifecycle {
    repository: Arc<dyn RosterRepository>,
}

impl GroupLifecycle {
    pub fn new(repository: Arc<dyn RosterRepository>) -> Self {
        Self { repository }
    }

    /// Creates a new, empty group
    ///
    /// # Errors
    /// * `Validation` - If the trimmed name is empty
    /// * `Conflict` - If a group with this name already exists
    /// * `Storage` - If the adapter fails for any other reason
    #[tracing::instrument(skip(self))]
    pub async fn create_group(&self, name: &str) -> RosterResult<Group> {
        let (group, events) = Group::new(name)?;

        self.repository
            .create_group(&group)
            .await
            .map_err(|e| match e {
                StorageError::Duplicate(_) => RosterError::conflict(format!(
                    "A group named {} already exists",
                    group.name()
                )),
                other => classify(other),
            })?;

        events.iter().for_each(RosterEvent::record);
        Ok(group)
    }

    /// Deletes a group together with all of its players
    ///
    /// # Errors
    /// * `NotFound` - If no such group exists
    #[tracing::instrument(skip(self))]
    pub async fn remove_group(&self, name: &str) -> RosterResult<()> {
        let name = GroupName::lookup(name)?;

        self.repository.delete_group(&name).await.map_err(|e| match e {
            StorageError::NotFound(_) => RosterError::not_found(format!("Group not found: {}", name)),
            other => classify(other),
        })?;

        RosterEvent::GroupRemoved { name }.record();
        Ok(())
    }

    pub async fn list_groups(&self) -> RosterResult<Vec<Group>> {
        self.repository.list_groups().await.map_err(classify)
    }

    pub async fn group_exists(&self, name: &str) -> RosterResult<bool> {
        match GroupName::parse(name) {
            Ok(name) => self.repository.group_exists(&name).await.map_err(classify),
            Err(_) => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::InMemoryRosterRepository;
    use crate::services::test_support::FailingRepository;

    fn lifecycle() -> GroupLifecycle {
        GroupLifecycle::new(Arc::new(InMemoryRosterRepository::new()))
    }

    #[tokio::test]
    async fn create_group_then_it_exists() {
        let groups = lifecycle();

        let group = groups.create_group("Turma 1").await.unwrap();

        assert_eq!(group.name().as_str(), "Turma 1");
        assert!(groups.group_exists("Turma 1").await.unwrap());
    }

    #[tokio::test]
    async fn create_group_trims_name() {
        let groups = lifecycle();

        groups.create_group("  Turma 1  ").await.unwrap();

        assert!(groups.group_exists("Turma 1").await.unwrap());
    }

    #[tokio::test]
    async fn create_group_twice_conflicts() {
        let groups = lifecycle();
        groups.create_group("Turma").await.unwrap();

        let err = groups.create_group("Turma").await.unwrap_err();

        assert!(matches!(err, RosterError::Conflict(_)));
        assert_eq!(err.to_string(), "A group named Turma already exists");
    }

    #[tokio::test]
    async fn create_group_conflicts_after_trimming() {
        let groups = lifecycle();
        groups.create_group("Turma").await.unwrap();

        assert!(matches!(
            groups.create_group(" Turma ").await,
            Err(RosterError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn create_group_with_blank_name_fails_validation() {
        let groups = lifecycle();

        for name in ["", "   ", "\t\n"] {
            assert!(matches!(
                groups.create_group(name).await,
                Err(RosterError::Validation(_))
            ));
        }
        assert!(groups.list_groups().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_missing_group_is_not_found() {
        let groups = lifecycle();

        assert!(matches!(
            groups.remove_group("Ghost").await,
            Err(RosterError::NotFound(_))
        ));
        assert!(matches!(
            groups.remove_group("  ").await,
            Err(RosterError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn remove_group_makes_it_absent() {
        let groups = lifecycle();
        groups.create_group("Turma").await.unwrap();

        groups.remove_group("Turma").await.unwrap();

        assert!(!groups.group_exists("Turma").await.unwrap());
        // Name can be reused once the group is gone.
        groups.create_group("Turma").await.unwrap();
    }

    #[tokio::test]
    async fn blank_name_never_exists() {
        assert!(!lifecycle().group_exists(" ").await.unwrap());
    }

    #[tokio::test]
    async fn storage_failures_propagate() {
        let groups = GroupLifecycle::new(Arc::new(FailingRepository));

        assert!(matches!(
            groups.create_group("Turma").await,
            Err(RosterError::Storage(StorageError::Backend(_)))
        ));
        assert!(matches!(
            groups.remove_group("Turma").await,
            Err(RosterError::Storage(_))
        ));
        assert!(matches!(
            groups.list_groups().await,
            Err(RosterError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn validation_happens_before_storage() {
        let groups = GroupLifecycle::new(Arc::new(FailingRepository));

        assert!(matches!(
            groups.create_group("").await,
            Err(RosterError::Validation(_))
        ));
    }
}
