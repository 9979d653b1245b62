use actix_web::{get, http::header, web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[get("/assets/{tail:.*}")]
#[instrument(skip(tail, state))]
pub async fn serve_asset(
    tail: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let (bytes, content_type) = state.asset_store.read(&tail).await?;

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, content_type))
        .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
        .body(bytes))
}
