use axum::{extract::State, Json};

use crate::domains::catalog::service;
use crate::domains::catalog::types::{BeachClub, MapResponse, Umbrella};
use crate::error::AppError;
use crate::state::AppState;

pub async fn get_club(State(state): State<AppState>) -> Result<Json<BeachClub>, AppError> {
    let club = service::get_club(state.store.as_ref(), state.club_id()?).await?;
    Ok(Json(club.into()))
}

pub async fn get_map(State(state): State<AppState>) -> Result<Json<MapResponse>, AppError> {
    let umbrellas = service::list_map(state.store.as_ref(), state.club_id()?).await?;
    Ok(Json(MapResponse {
        umbrellas: umbrellas.into_iter().map(Umbrella::from).collect(),
    }))
}
