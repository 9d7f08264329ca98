pub mod classifier;
pub mod engine;
pub mod evaluator;

pub use crate::domain::model::{Recurrence, Solution};
pub use crate::domain::ports::{ConfigProvider, Solver};
pub use crate::utils::error::Result;
