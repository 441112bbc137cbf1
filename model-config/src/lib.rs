//! Training configuration and model hyperparameter extraction.

mod common;
pub mod config;
pub mod hyperparameters;

pub use config::*;
pub use hyperparameters::*;
