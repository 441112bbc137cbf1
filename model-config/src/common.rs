pub use anyhow::{format_err, Context as _, Result};
pub use indexmap::IndexMap;
pub use log::debug;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use std::{fs, path::Path};
