use anyhow::{format_err, Context, Result};
use clap::Parser;
use log::info;
use model_config::{load_value, model_hyperparameters, Config};
use prettytable::{row, Table};
use reid_dataset::{DatasetConfig, LabelOrder, VricDataset};
use std::{env, num::NonZeroUsize, path::PathBuf};

#[derive(Debug, Clone, Parser)]
/// Inspect re-identification datasets and model configurations
enum Opts {
    /// Load the dataset specified in a configuration file
    Info {
        /// configuration file
        config_file: PathBuf,
    },
    /// Load a dataset from a root directory
    Stats {
        /// directory containing the VRIC directory
        #[clap(long)]
        root: PathBuf,
        /// use at most this number of images per directory
        #[clap(long)]
        scan_limit: Option<NonZeroUsize>,
        /// order of train identity labels, "sorted" or "first_seen"
        #[clap(long, default_value = "sorted")]
        label_order: LabelOrder,
        /// do not print the statistics table while loading
        #[clap(long)]
        quiet: bool,
    },
    /// Print the model hyperparameters in a configuration file
    Hparams {
        /// configuration file
        config_file: PathBuf,
    },
}

fn main() -> Result<()> {
    // setup logging
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    match Opts::parse() {
        Opts::Info { config_file } => {
            let config = Config::open(&config_file)?;
            let dataset_config = config.dataset.ok_or_else(|| {
                format_err!(
                    "the config file '{}' does not have a dataset section",
                    config_file.display()
                )
            })?;
            let dataset_config = DatasetConfig {
                verbose: true,
                ..dataset_config
            };
            stats(&dataset_config)?;
        }
        opts @ Opts::Stats { .. } => {
            let dataset_config = opts
                .dataset_config()
                .ok_or_else(|| format_err!("expect the stats command"))?;
            stats(&dataset_config)?;
        }
        Opts::Hparams { config_file } => {
            hparams(config_file)?;
        }
    }

    Ok(())
}

impl Opts {
    /// The dataset options given on the command line, if any.
    fn dataset_config(&self) -> Option<DatasetConfig> {
        match *self {
            Opts::Stats {
                ref root,
                scan_limit,
                label_order,
                quiet,
            } => Some(DatasetConfig {
                verbose: !quiet,
                scan_limit,
                label_order,
                ..DatasetConfig::new(root)
            }),
            _ => None,
        }
    }
}

/// Load a dataset. The statistics table is printed only if the config is verbose.
fn stats(config: &DatasetConfig) -> Result<()> {
    let dataset = VricDataset::load(config)
        .with_context(|| format!("failed to load dataset from '{}'", config.root.display()))?;

    info!(
        "{} images without annotations",
        dataset.train_report.num_unannotated
            + dataset.query_report.num_unannotated
            + dataset.gallery_report.num_unannotated
    );

    Ok(())
}

fn hparams(config_file: PathBuf) -> Result<()> {
    let value = load_value(&config_file)?;
    let params = model_hyperparameters(&value)
        .with_context(|| format!("invalid config file '{}'", config_file.display()))?;

    let mut table = Table::new();
    table.add_row(row!["key", "value"]);
    params.iter().for_each(|(key, value)| {
        table.add_row(row![key, value.to_string()]);
    });
    table.printstd();

    Ok(())
}
