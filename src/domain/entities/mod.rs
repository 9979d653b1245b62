pub mod contact;
pub mod lightbox;
pub mod media;
pub mod photographer;
