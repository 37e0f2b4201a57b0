pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::cli::{InputSource, OutputTarget};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{engine::IntakeEngine, rules::UserRules, Address, Model, User};
pub use crate::utils::error::{IntakeError, Result, ValidationError};
