pub mod config;
pub mod errors;
pub mod hydrate;
pub mod kernel;
