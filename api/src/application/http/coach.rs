pub mod handlers;
pub mod router;
pub mod submission;
pub mod ui_config;
pub mod validators;
pub mod views;
