pub mod entities;
pub mod errors;
pub mod ports;
pub mod prompt;
pub mod schema;
pub mod services;

#[cfg(test)]
pub(crate) mod fixtures;

pub use entities::*;
pub use errors::*;
pub use ports::*;
