use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::group::Group;
use crate::domain::player::Team;

/// Request body for creating a group
#[derive(Debug, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct GroupResponse {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Group> for GroupResponse {
    fn from(group: &Group) -> Self {
        Self {
            name: group.name().to_string(),
            created_at: group.created_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeamCount {
    pub team: Team,
    pub count: usize,
}

/// Overview of one group: how many players each team has
#[derive(Debug, Serialize)]
pub struct GroupDetailResponse {
    pub name: String,
    pub player_count: usize,
    pub teams: Vec<TeamCount>,
}

/// List all groups
///
/// GET /api/groups
pub async fn list_groups(
    State(state): State<AppState>,
) -> Result<Json<Vec<GroupResponse>>, ApiError> {
    let groups = state
        .groups
        .list_groups()
        .await
        .map_err(|e| ApiError::from_roster(e, "Unable to load groups"))?;

    Ok(Json(groups.iter().map(GroupResponse::from).collect()))
}

/// Create a new group
///
/// POST /api/groups
pub async fn create_group(
    State(state): State<AppState>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupResponse>), ApiError> {
    let group = state
        .groups
        .create_group(&req.name)
        .await
        .map_err(|e| ApiError::from_roster(e, "Unable to create group"))?;

    Ok((StatusCode::CREATED, Json(GroupResponse::from(&group))))
}

/// Get a group with its per-team player counts
///
/// GET /api/groups/:group
pub async fn get_group(
    State(state): State<AppState>,
    Path(group): Path<String>,
) -> Result<Json<GroupDetailResponse>, ApiError> {
    let players = state
        .players
        .list_players(&group)
        .await
        .map_err(|e| ApiError::from_roster(e, "Unable to load group"))?;

    let teams = Team::ALL
        .iter()
        .map(|team| TeamCount {
            team: *team,
            count: players.iter().filter(|p| p.team() == *team).count(),
        })
        .collect();

    Ok(Json(GroupDetailResponse {
        name: group.trim().to_string(),
        player_count: players.len(),
        teams,
    }))
}

/// Delete a group and all of its players
///
/// DELETE /api/groups/:group
pub async fn delete_group(
    State(state): State<AppState>,
    Path(group): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .groups
        .remove_group(&group)
        .await
        .map_err(|e| ApiError::from_roster(e, "Unable to remove group"))?;

    Ok(StatusCode::NO_CONTENT)
}
