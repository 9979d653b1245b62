use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, use_cases::gallery::SortOrder, AppState};

#[instrument(skip(state))]
pub async fn list_photographers(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let cards = state.catalog_handler.photographer_cards().await?;
    Ok(HttpResponse::Ok().json(cards))
}

#[instrument(skip(photographer_id, state))]
pub async fn get_photographer(
    photographer_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let photographer = state.catalog_handler.get_photographer(&photographer_id).await?;
    Ok(HttpResponse::Ok().json(photographer))
}

#[instrument(skip(photographer_id, state, query))]
pub async fn get_photographer_media(
    photographer_id: web::Path<String>,
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let photographer = state.catalog_handler.get_photographer(&photographer_id).await?;
    let sort = SortOrder::from_query(query.get("sort").map(String::as_str))?;

    let summary = state.gallery_handler.summary(photographer.id, sort).await?;
    Ok(HttpResponse::Ok().json(summary))
}
