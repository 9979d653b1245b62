use actix_web::web;

use crate::handlers::{contact, lightbox, photographers};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/photographers")
            .service(
                web::resource("")
                    .route(web::get().to(photographers::list_photographers))
            )
            .service(
                web::resource("/{photographer_id}")
                    .route(web::get().to(photographers::get_photographer))
            )
            .service(
                web::resource("/{photographer_id}/media")
                    .route(web::get().to(photographers::get_photographer_media))
            )
            .service(
                web::resource("/{photographer_id}/lightbox")
                    .route(web::post().to(lightbox::open_lightbox))
            )
            .service(
                web::resource("/{photographer_id}/contact")
                    .route(web::post().to(contact::submit_contact))
            )
    );
}
