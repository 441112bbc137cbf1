//! Dataset processing toolkit.

mod annotation;
mod dataset;
mod record;
mod statistics;
mod utils;
mod vric;

pub use annotation::*;
pub use dataset::*;
pub use record::*;
pub use statistics::*;
pub use utils::*;
pub use vric::*;
