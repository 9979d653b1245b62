use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::media::MediaId, errors::AppError, AppState};

#[instrument(skip(media_id, state))]
pub async fn toggle_like(
    media_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = media_id
        .trim()
        .parse::<u64>()
        .map(MediaId)
        .map_err(|_| AppError::BadRequest(format!("Invalid media id: {}", media_id)))?;

    let like_state = state.gallery_handler.toggle_like(id).await?;
    Ok(HttpResponse::Ok().json(like_state))
}
