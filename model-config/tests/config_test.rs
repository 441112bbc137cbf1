use anyhow::Result;
use model_config::{load_value, model_hyperparameters, Config};
use reid_dataset::{DatasetConfig, LabelOrder, VricDataset};
use serde_json::json;
use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

const CONFIG_FILE_NAMES: &[&str] = &["vric.json5", "legacy.json5"];

lazy_static::lazy_static! {
    static ref CONFIG_DIR: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("cfg");
    static ref CONFIG_FILES: Vec<PathBuf> = {
        CONFIG_FILE_NAMES.iter().map(|file_name| CONFIG_DIR.join(file_name)).collect()
    };
}

#[test]
fn load_config_test() -> Result<()> {
    CONFIG_FILES.iter().try_for_each(|path| -> Result<_> {
        let config = Config::open(path)?;
        let value = load_value(path)?;
        assert_eq!(config.model_hyperparameters(), model_hyperparameters(&value)?);
        Ok(())
    })?;
    Ok(())
}

#[test]
fn legacy_config_test() -> Result<()> {
    let config = Config::open(CONFIG_DIR.join("legacy.json5"))?;
    let params = config.model_hyperparameters();
    assert_eq!(params.len(), 2);
    assert_eq!(params["NAME"], json!("resnet50_ibn_a"));
    assert_eq!(
        config.dataset,
        Some(DatasetConfig {
            scan_limit: NonZeroUsize::new(10),
            label_order: LabelOrder::FirstSeen,
            ..DatasetConfig::new("/data/datasets")
        })
    );
    Ok(())
}

#[test]
fn config_without_model_test() -> Result<()> {
    let path = CONFIG_DIR.join("no_model.json5");
    assert!(Config::open(&path).is_err());
    assert!(model_hyperparameters(&load_value(&path)?).is_err());
    Ok(())
}

#[test]
fn load_dataset_from_config_test() -> Result<()> {
    let config = Config::open(CONFIG_DIR.join("vric.json5"))?;
    let mut dataset_config = config.dataset.unwrap();
    dataset_config.root = Path::new(env!("CARGO_MANIFEST_DIR")).join(&dataset_config.root);

    let dataset = VricDataset::load(&dataset_config)?;
    assert_eq!(dataset.num_train_pids(), 3);
    assert_eq!(dataset.num_query_imgs(), 2);
    Ok(())
}
