use std::collections::HashMap;

use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::photographer::PhotographerId,
    errors::AppError,
    use_cases::gallery::SortOrder,
    web::templates::{self, PhotographerPage},
    AppState,
};

#[get("/")]
#[instrument(skip(state))]
pub async fn home(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let cards = state.catalog_handler.photographer_cards().await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(templates::index_page(&cards).into_string()))
}

#[get("/photographer/{photographer_id}")]
#[instrument(skip(state, query))]
pub async fn photographer_page(
    photographer_id: web::Path<String>,
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let photographer = state.catalog_handler.get_photographer(&photographer_id).await?;
    let sort = SortOrder::from_query(query.get("sort").map(String::as_str))?;

    let gallery = state.gallery_handler.gallery(photographer.id).await?;
    let html = {
        let gallery = gallery.read();
        let media = gallery.sorted(sort);
        let liked = |item: &crate::entities::media::MediaItem| gallery.is_liked(item.id);

        templates::photographer_page(&PhotographerPage {
            photographer: &photographer,
            media: &media,
            liked: &liked,
            total_likes: gallery.total_likes(),
            sort,
            assets: &state.assets,
        })
        .into_string()
    };

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}

/// Keeps `/photographer.html?id=243` links from the static site working.
#[get("/photographer.html")]
pub async fn legacy_photographer_page(
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let raw_id = query
        .get("id")
        .ok_or_else(|| AppError::BadRequest("Missing photographer id".to_string()))?;
    let id: PhotographerId = raw_id.parse()?;

    Ok(HttpResponse::PermanentRedirect()
        .insert_header(("Location", format!("/photographer/{}", id)))
        .finish())
}
