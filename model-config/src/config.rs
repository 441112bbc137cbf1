//! The configuration file format.

use crate::{common::*, hyperparameters::Hyperparameters};
use reid_dataset::DatasetConfig;

/// The main configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Free-form model hyperparameters.
    #[serde(alias = "MODEL")]
    pub model: Hyperparameters,
    /// Dataset options.
    #[serde(alias = "DATASETS", default)]
    pub dataset: Option<DatasetConfig>,
}

impl Config {
    /// Load a JSON5 configuration file.
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config = json5::from_str(&text)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        Ok(config)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let config = serde_json::from_value(value)?;
        Ok(config)
    }

    /// Copy the model section into a flat mapping.
    pub fn model_hyperparameters(&self) -> Hyperparameters {
        self.model
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

/// Load a JSON5 file without a fixed schema.
pub fn load_value<P>(path: P) -> Result<Value>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    let value = json5::from_str(&text)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
    Ok(value)
}
