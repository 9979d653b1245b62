use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        lightbox::{JumpRequest, KeyRequest, OpenLightboxRequest, SessionId},
        photographer::PhotographerId,
    },
    errors::AppError,
    use_cases::{gallery::SortOrder, lightbox::start_position},
    AppState,
};

/// Opens the lightbox on the grid cell the visitor activated.
///
/// The index refers to the grid in the given sort order, so the client sends
/// back the order it rendered. When the clicked `media_id` is sent, the
/// lightbox opens on that item even if like counts reordered the grid.
#[instrument(skip(photographer_id, state, data))]
pub async fn open_lightbox(
    photographer_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<OpenLightboxRequest>,
) -> Result<impl Responder, AppError> {
    let id: PhotographerId = photographer_id.parse()?;
    let request = data.into_inner();
    let sort = SortOrder::from_query(request.sort.as_deref())?;

    let items = state.gallery_handler.sorted_media(id, sort).await?;
    let start = start_position(&items, request.index, request.media_id)?;
    let view = state.lightbox_sessions.open(id, items, start)?;

    Ok(HttpResponse::Created().json(view))
}

fn session_id(raw: &str) -> Result<SessionId, AppError> {
    raw.parse()
}

#[instrument(skip(session, state))]
pub async fn next_media(
    session: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let view = state.lightbox_sessions.advance(session_id(&session)?)?;
    Ok(HttpResponse::Ok().json(view))
}

#[instrument(skip(session, state))]
pub async fn previous_media(
    session: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let view = state.lightbox_sessions.retreat(session_id(&session)?)?;
    Ok(HttpResponse::Ok().json(view))
}

#[instrument(skip(session, state, data))]
pub async fn jump_to_media(
    session: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<JumpRequest>,
) -> Result<impl Responder, AppError> {
    let view = state.lightbox_sessions.jump_to(session_id(&session)?, data.index)?;
    Ok(HttpResponse::Ok().json(view))
}

#[instrument(skip(session, state))]
pub async fn refresh_lightbox(
    session: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let view = state.lightbox_sessions.refresh(session_id(&session)?)?;
    Ok(HttpResponse::Ok().json(view))
}

#[instrument(skip(session, state, data))]
pub async fn press_key(
    session: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<KeyRequest>,
) -> Result<impl Responder, AppError> {
    let outcome = state.lightbox_sessions.handle_key(session_id(&session)?, &data.key)?;
    Ok(HttpResponse::Ok().json(outcome))
}

#[instrument(skip(session, state))]
pub async fn close_lightbox(
    session: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let closed = state.lightbox_sessions.close(session_id(&session)?)?;
    Ok(HttpResponse::Ok().json(closed))
}
