use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use super::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{FilterJoyasParams, Joya, JoyaFilter, JoyasPage, ListJoyasParams, ListJoyasQuery};

/// GET /joyas
pub async fn list_joyas(
    State(state): State<AppState>,
    params: Result<Query<ListJoyasParams>, QueryRejection>,
) -> AppResult<Json<JoyasPage>> {
    let Query(params) = params.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let query = ListJoyasQuery::try_from(params)?;

    let page = state.joyas.list(query).await?;
    Ok(Json(page))
}

/// GET /joyas/filtros
///
/// No match is not an error: the body is then an empty array.
pub async fn filter_joyas(
    State(state): State<AppState>,
    params: Result<Query<FilterJoyasParams>, QueryRejection>,
) -> AppResult<Json<Vec<Joya>>> {
    let Query(params) = params.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let filter = JoyaFilter::try_from(params)?;

    let joyas = state.joyas.filter(filter).await?;
    Ok(Json(joyas))
}
