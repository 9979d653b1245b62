//! Server-rendered pages. Interpolated values are escaped by `maud`; asset
//! URLs come already percent-encoded from [`AssetResolver`].

use maud::{html, Markup, DOCTYPE};

use crate::{
    entities::{
        media::{MediaItem, MediaKind},
        photographer::{Photographer, PhotographerCard},
    },
    use_cases::gallery::SortOrder,
    utils::assets::AssetResolver,
};

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/assets/css/style.css";
            }
            body {
                header {
                    a href="/" aria-label="Fisheye Home page" {
                        img src="/assets/images/logo.png" class="logo" alt="Fisheye Home page";
                    }
                }
                (body)
            }
        }
    }
}

/// Home page: one card per photographer.
pub fn index_page(cards: &[PhotographerCard]) -> Markup {
    let body = html! {
        main id="main" {
            h1 { "Nos photographes" }
            div class="photographer_section" {
                @for card in cards {
                    article {
                        a href=(card.profile_url) {
                            img src=(card.portrait_url) alt=(card.name) aria-label={ "Photographe: " (card.name) };
                            h2 { (card.name) }
                        }
                        h3 { (card.location) }
                        p { (card.tagline) }
                        p class="price" { (card.day_rate) }
                    }
                }
            }
        }
    };

    layout("Fisheye", body)
}

/// Everything the detail page needs.
pub struct PhotographerPage<'a> {
    pub photographer: &'a Photographer,
    pub media: &'a [MediaItem],
    pub liked: &'a dyn Fn(&MediaItem) -> bool,
    pub total_likes: u64,
    pub sort: SortOrder,
    pub assets: &'a AssetResolver,
}

pub fn photographer_page(page: &PhotographerPage<'_>) -> Markup {
    let p = page.photographer;

    let body = html! {
        main id="main" data-photographer-id=(p.id.0) {
            div class="photograph-header" {
                div class="photograph-profile" {
                    h1 { (p.name) }
                    h2 { (p.location()) }
                    p { (p.tagline) }
                }
                button class="contact_button" aria-label="Contactez-moi" { "Contactez-moi" }
                img src=(page.assets.portrait_url(&p.portrait)) alt=(p.name) aria-label={ "Photographe: " (p.name) };
            }
            nav class="custom-select" aria-label="Trier par" {
                @for order in SortOrder::ALL {
                    a class="select-item" href={ "?sort=" (order.key()) }
                        aria-selected=[(order == page.sort).then_some("true")] {
                        (order.label())
                    }
                }
            }
            section class="photograph_section" {
                @for (index, item) in page.media.iter().enumerate() {
                    (media_card(page, index, item))
                }
            }
            aside class="likes-banner" {
                h2 class="likes" { (page.total_likes) }
                p { (p.price) "€ / jour" }
            }
        }
        (contact_modal(p))
        (lightbox_modal())
    };

    layout(&format!("Fisheye - {}", p.name), body)
}

fn media_card(page: &PhotographerPage<'_>, index: usize, item: &MediaItem) -> Markup {
    let src = page.assets.media_url(item.asset_path());
    let heart = if (page.liked)(item) { "full-heart" } else { "empty-heart" };

    html! {
        article data-index=(index) data-media-id=(item.id.0) {
            @match item.kind {
                MediaKind::Image(_) => {
                    img src=(src) alt=(item.title) aria-label={ "Photographe: " (item.title) } tabindex="0";
                }
                MediaKind::Video(_) => {
                    video src=(src) aria-label={ "Photographe: " (item.title) } controls tabindex="0" {}
                }
            }
            div class="card-content" {
                div class="card-txt" {
                    h3 { (item.title) }
                }
                span class={ "heart-icon " (heart) } tabindex="0" {
                    p { (item.likes) }
                }
            }
        }
    }
}

fn contact_modal(p: &Photographer) -> Markup {
    html! {
        div id="contact_modal" aria-hidden="true" style="display:none" {
            div class="modal" {
                header {
                    h2 { "Contactez-moi" }
                    h2 class="photograph_contact" { (p.name) }
                }
                form method="post" action={ "/api/v1/photographers/" (p.id.0) "/contact" } {
                    label for="firstname" { "Prénom" }
                    input id="firstname" name="firstName";
                    label for="lastname" { "Nom" }
                    input id="lastname" name="lastName";
                    label for="email" { "Email" }
                    input id="email" name="email" type="email";
                    label for="message" { "Votre message" }
                    textarea id="message" name="message" {}
                    button class="contact_button" type="submit" { "Envoyer" }
                }
            }
        }
    }
}

fn lightbox_modal() -> Markup {
    html! {
        div id="carrousel_modal" aria-hidden="true" style="display:none" {
            button id="left-btn" aria-label="Image précédente" { "<" }
            img id="carousel" alt="";
            video id="video" style="display:none" {}
            button id="right-btn" aria-label="Image suivante" { ">" }
            div class="card-txt-modal" {
                h3 id="carousel-title" {}
            }
        }
    }
}
