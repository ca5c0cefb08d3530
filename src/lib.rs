pub mod anagram;
pub mod app_state;
pub mod config;
pub mod dictionary;
pub mod handlers;
pub mod router;
pub mod validation;
