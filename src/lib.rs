pub mod client;
pub mod core;
pub mod types;

pub use client::{TeamCowboy, TeamCowboyBuilder};
pub use crate::core::{
    config::{ClientConfig, ConfigError},
    errors::TeamCowboyError,
    kernel::{ApiError, CallOutcome},
};
pub use types::*;
