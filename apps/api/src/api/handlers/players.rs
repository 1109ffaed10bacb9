use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::player::{Player, Team};

/// Request body for adding a player
#[derive(Debug, Deserialize)]
pub struct AddPlayerRequest {
    pub name: String,
    pub team: String,
}

/// Optional team filter for the player listing
#[derive(Debug, Deserialize)]
pub struct PlayersQuery {
    pub team: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub name: String,
    pub team: Team,
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            team: player.team(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlayersResponse {
    pub group: String,
    pub team: Option<Team>,
    pub count: usize,
    pub players: Vec<PlayerResponse>,
}

/// Team labels offered as filters
///
/// GET /api/teams
pub async fn list_teams() -> Json<Vec<Team>> {
    Json(Team::ALL.to_vec())
}

/// List the players of a group, optionally for one team
///
/// GET /api/groups/:group/players?team=Team%20A
pub async fn list_players(
    State(state): State<AppState>,
    Path(group): Path<String>,
    Query(query): Query<PlayersQuery>,
) -> Result<Json<PlayersResponse>, ApiError> {
    const FALLBACK: &str = "Unable to load players";

    let team = query
        .team
        .as_deref()
        .map(str::parse::<Team>)
        .transpose()
        .map_err(|e| ApiError::from_roster(e, FALLBACK))?;

    let players = match team {
        Some(team) => state.players.list_players_by_team(&group, team).await,
        None => state.players.list_players(&group).await,
    }
    .map_err(|e| ApiError::from_roster(e, FALLBACK))?;

    Ok(Json(PlayersResponse {
        group: group.trim().to_string(),
        team,
        count: players.len(),
        players: players.iter().map(PlayerResponse::from).collect(),
    }))
}

/// Add a player to a group
///
/// POST /api/groups/:group/players
pub async fn add_player(
    State(state): State<AppState>,
    Path(group): Path<String>,
    Json(req): Json<AddPlayerRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>), ApiError> {
    const FALLBACK: &str = "Unable to add player";

    let team = req
        .team
        .parse::<Team>()
        .map_err(|e| ApiError::from_roster(e, FALLBACK))?;

    let player = state
        .players
        .add_player(&group, &req.name, team)
        .await
        .map_err(|e| ApiError::from_roster(e, FALLBACK))?;

    Ok((StatusCode::CREATED, Json(PlayerResponse::from(&player))))
}

/// Remove a player from a group, whatever its team
///
/// DELETE /api/groups/:group/players/:player
pub async fn remove_player(
    State(state): State<AppState>,
    Path((group, player)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state
        .players
        .remove_player(&group, &player)
        .await
        .map_err(|e| ApiError::from_roster(e, "Unable to remove player"))?;

    Ok(StatusCode::NO_CONTENT)
}
