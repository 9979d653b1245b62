use actix_web::web;

use crate::handlers::lightbox;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/lightbox/{session_id}")
            .service(
                web::resource("")
                    .route(web::delete().to(lightbox::close_lightbox))
            )
            .service(
                web::resource("/next")
                    .route(web::post().to(lightbox::next_media))
            )
            .service(
                web::resource("/previous")
                    .route(web::post().to(lightbox::previous_media))
            )
            .service(
                web::resource("/jump")
                    .route(web::post().to(lightbox::jump_to_media))
            )
            .service(
                web::resource("/refresh")
                    .route(web::post().to(lightbox::refresh_lightbox))
            )
            .service(
                web::resource("/key")
                    .route(web::post().to(lightbox::press_key))
            )
    );
}
