use actix_web::web;

use crate::{constants::API_PREFIX, handlers::{assets, json_error::not_found, pages}};

mod json_error;
mod lightbox;
mod media;
mod photographers;
mod system;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::home)
        .service(pages::legacy_photographer_page)
        .service(pages::photographer_page)
        .service(assets::serve_asset);

    cfg.service(
        web::scope(API_PREFIX)
            .configure(system::config_routes)
            .configure(photographers::config_routes)
            .configure(media::config_routes)
            .configure(lightbox::config_routes)
    );

    cfg.configure(json_error::config_routes);
    cfg.default_service(web::to(not_found));
}
