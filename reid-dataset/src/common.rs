pub use anyhow::{bail, format_err, Context as _, Result};
pub use indexmap::IndexSet;
pub use itertools::Itertools as _;
pub use log::{debug, info, warn};
pub use serde::{Deserialize, Serialize};
pub use std::{
    collections::{BTreeSet, HashMap},
    fmt,
    fmt::Debug,
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
    str::FromStr,
};
pub use thiserror::Error;
