//! Dataset loading options.

use crate::common::*;

/// The scan limit applied by [DatasetConfig::legacy].
pub const LEGACY_SCAN_LIMIT: usize = 10;

/// Dataset options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// The directory containing the dataset directory.
    pub root: PathBuf,
    /// If set, print the statistics table after loading.
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    /// If set, only the first N matched images per directory are used.
    #[serde(default)]
    pub scan_limit: Option<NonZeroUsize>,
    /// The order in which train identities receive contiguous labels.
    #[serde(default)]
    pub label_order: LabelOrder,
}

impl DatasetConfig {
    pub fn new<P>(root: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            root: root.as_ref().to_owned(),
            verbose: true,
            scan_limit: None,
            label_order: LabelOrder::default(),
        }
    }

    /// Options that truncate each image directory to the first
    /// [LEGACY_SCAN_LIMIT] matches.
    pub fn legacy<P>(root: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            scan_limit: NonZeroUsize::new(LEGACY_SCAN_LIMIT),
            ..Self::new(root)
        }
    }
}

/// The order of identities when assigning contiguous labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelOrder {
    /// Ascending by raw identity id.
    Sorted,
    /// In the order identities are first encountered in the scan.
    FirstSeen,
}

impl Default for LabelOrder {
    fn default() -> Self {
        Self::Sorted
    }
}

impl FromStr for LabelOrder {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let order = match text {
            "sorted" => Self::Sorted,
            "first_seen" => Self::FirstSeen,
            _ => bail!(
                "invalid label order '{}', expect 'sorted' or 'first_seen'",
                text
            ),
        };
        Ok(order)
    }
}

fn default_verbose() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_config_defaults() -> Result<()> {
        let config: DatasetConfig = json5::from_str(r#"{ root: "/data" }"#)?;
        assert_eq!(config, DatasetConfig::new("/data"));
        assert!(config.verbose);
        assert_eq!(config.scan_limit, None);
        assert_eq!(config.label_order, LabelOrder::Sorted);
        Ok(())
    }

    #[test]
    fn dataset_config_full() -> Result<()> {
        let config: DatasetConfig = json5::from_str(
            r#"{
                root: "/data",
                verbose: false,
                scan_limit: 10,
                label_order: "first_seen",
            }"#,
        )?;
        assert!(!config.verbose);
        assert_eq!(config.scan_limit, NonZeroUsize::new(LEGACY_SCAN_LIMIT));
        assert_eq!(config.label_order, LabelOrder::FirstSeen);
        Ok(())
    }

    #[test]
    fn parse_label_order() -> Result<()> {
        assert_eq!("sorted".parse::<LabelOrder>()?, LabelOrder::Sorted);
        assert_eq!("first_seen".parse::<LabelOrder>()?, LabelOrder::FirstSeen);
        assert!("random".parse::<LabelOrder>().is_err());
        Ok(())
    }

    #[test]
    fn zero_scan_limit_is_rejected() {
        let result: Result<DatasetConfig, _> = json5::from_str(r#"{ root: "/data", scan_limit: 0 }"#);
        assert!(result.is_err());
    }
}
