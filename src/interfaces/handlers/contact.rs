use actix_web::{web, Either, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{contact::ContactForm, photographer::PhotographerId},
    errors::AppError,
    AppState,
};

/// Accepts the JSON body sent by scripts and the urlencoded body the detail
/// page's `<form>` posts.
#[instrument(skip(photographer_id, state, form))]
pub async fn submit_contact(
    photographer_id: web::Path<String>,
    state: web::Data<AppState>,
    form: Either<web::Json<ContactForm>, web::Form<ContactForm>>,
) -> Result<impl Responder, AppError> {
    let id: PhotographerId = photographer_id.parse()?;
    let form = match form {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    let response = state.contact_handler
        .submit(id, form)
        .await?;

    Ok(HttpResponse::Created().json(response))
}
