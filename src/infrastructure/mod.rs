pub mod utils;
pub mod web;
