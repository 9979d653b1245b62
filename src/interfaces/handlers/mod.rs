pub mod assets;
pub mod contact;
pub mod json_error;
pub mod lightbox;
pub mod media;
pub mod pages;
pub mod photographers;
pub mod system;
