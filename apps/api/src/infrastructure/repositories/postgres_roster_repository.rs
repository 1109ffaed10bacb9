use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::errors::StorageError;
use crate::domain::group::{Group, GroupName};
use crate::domain::player::{Player, PlayerName, Team};
use crate::domain::repositories::RosterRepository;

/// PostgreSQL implementation of RosterRepository
///
/// Uniqueness is enforced by `UNIQUE` constraints and cascade by
/// `ON DELETE CASCADE`, so racing writers cannot break either invariant.
/// Schema lives in `migrations/`.
pub struct PostgresRosterRepository {
    pool: PgPool,
}

impl PostgresRosterRepository {
    /// Creates a new PostgresRosterRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies pending schema migrations
    pub async fn migrate(&self) -> Result<(), StorageError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StorageError::Backend(format!("Failed to run migrations: {}", e)))
    }

    async fn group_id(&self, name: &GroupName) -> Result<Option<Uuid>, StorageError> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM groups WHERE name = $1")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| backend("find group", e))
    }
}

fn backend(action: &str, error: sqlx::Error) -> StorageError {
    StorageError::Backend(format!("Failed to {}: {}", action, error))
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_unique_violation())
}

fn missing_group(name: &GroupName) -> StorageError {
    StorageError::NotFound(format!("Group not found: {}", name))
}

fn group_from_row(row: &PgRow) -> Result<Group, StorageError> {
    let id: Uuid = row.try_get("id").map_err(|e| backend("read group row", e))?;
    let name: String = row.try_get("name").map_err(|e| backend("read group row", e))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| backend("read group row", e))?;

    let name = GroupName::parse(&name)
        .map_err(|e| StorageError::Corrupt(format!("group {}: {}", id, e)))?;

    Ok(Group::from_persistence(id, name, created_at))
}

fn player_from_row(row: &PgRow) -> Result<Player, StorageError> {
    let id: Uuid = row.try_get("id").map_err(|e| backend("read player row", e))?;
    let name: String = row.try_get("name").map_err(|e| backend("read player row", e))?;
    let team: Team = row.try_get("team").map_err(|e| backend("read player row", e))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| backend("read player row", e))?;

    let name = PlayerName::parse(&name)
        .map_err(|e| StorageError::Corrupt(format!("player {}: {}", id, e)))?;

    Ok(Player::from_persistence(id, name, team, created_at))
}

#[async_trait]
impl RosterRepository for PostgresRosterRepository {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn create_group(&self, group: &Group) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO groups (id, name, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(group.id())
        .bind(group.name().as_str())
        .bind(group.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StorageError::Duplicate(format!("Group already exists: {}", group.name()))
            } else {
                backend("create group", e)
            }
        })?;

        Ok(())
    }

    async fn delete_group(&self, name: &GroupName) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM groups WHERE name = $1")
            .bind(name.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| backend("delete group", e))?;

        if result.rows_affected() == 0 {
            return Err(missing_group(name));
        }

        Ok(())
    }

    async fn group_exists(&self, name: &GroupName) -> Result<bool, StorageError> {
        Ok(self.group_id(name).await?.is_some())
    }

    async fn list_groups(&self) -> Result<Vec<Group>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM groups
            ORDER BY position
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| backend("list groups", e))?;

        rows.iter().map(group_from_row).collect()
    }

    async fn add_player(&self, group: &GroupName, player: &Player) -> Result<(), StorageError> {
        // Resolving the group inside the INSERT keeps the write a single statement.
        let result = sqlx::query(
            r#"
            INSERT INTO players (id, group_id, name, team, created_at)
            SELECT $1, g.id, $3, $4, $5
            FROM groups g
            WHERE g.name = $2
            "#,
        )
        .bind(player.id())
        .bind(group.as_str())
        .bind(player.name().as_str())
        .bind(player.team())
        .bind(player.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StorageError::Duplicate(format!(
                    "Player {} already exists in group {}",
                    player.name(),
                    group
                ))
            } else {
                backend("add player", e)
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(missing_group(group));
        }

        Ok(())
    }

    async fn remove_player(
        &self,
        group: &GroupName,
        player: &PlayerName,
    ) -> Result<(), StorageError> {
        let group_id = self
            .group_id(group)
            .await?
            .ok_or_else(|| missing_group(group))?;

        let result = sqlx::query("DELETE FROM players WHERE group_id = $1 AND name = $2")
            .bind(group_id)
            .bind(player.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| backend("remove player", e))?;

        if result.rows_affected() == 0 {
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
        let group_id = self
            .group_id(group)
            .await?
            .ok_or_else(|| missing_group(group))?;

        let rows = sqlx::query(
            r#"
            SELECT id, name, team, created_at
            FROM players
            WHERE group_id = $1 AND ($2::team_label IS NULL OR team = $2)
            ORDER BY position
            "#,
        )
        .bind(group_id)
        .bind(team)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| backend("list players", e))?;

        rows.iter().map(player_from_row).collect()
    }
}
