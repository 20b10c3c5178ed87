pub mod coach;
pub mod common;
