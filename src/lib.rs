pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{CliConfig, SolverSettings, TomlConfig};
pub use crate::core::engine::{PatternSolver, SolverEngine};
pub use crate::domain::model::{Recurrence, Solution};
pub use crate::utils::error::{Result, SolverError, INVALID_INPUT_MESSAGE};
