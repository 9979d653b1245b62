use actix_web::web;

use crate::handlers::media;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/media/{media_id}/like")
            .route(web::post().to(media::toggle_like))
    );
}
