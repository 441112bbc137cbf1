use super::*;
use crate::common::*;
use prettytable::{format, row, Table};

/// The counts of a dataset partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartitionStatistics {
    pub num_pids: usize,
    pub num_images: usize,
    pub num_cams: usize,
    pub num_vids: usize,
}

impl PartitionStatistics {
    pub fn from_samples(samples: &[Sample]) -> Self {
        Self {
            num_pids: samples.iter().map(|sample| sample.pid).unique().count(),
            num_images: samples.len(),
            num_cams: samples.iter().map(|sample| sample.camid).unique().count(),
            num_vids: samples.iter().map(|sample| sample.instance).unique().count(),
        }
    }
}

/// The counts of train, query and gallery partitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetStatistics {
    pub train: PartitionStatistics,
    pub query: PartitionStatistics,
    pub gallery: PartitionStatistics,
}

impl DatasetStatistics {
    pub fn new(train: &[Sample], query: &[Sample], gallery: &[Sample]) -> Self {
        Self {
            train: PartitionStatistics::from_samples(train),
            query: PartitionStatistics::from_samples(query),
            gallery: PartitionStatistics::from_samples(gallery),
        }
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        table.set_titles(row!["subset", r->"# ids", r->"# images", r->"# cameras"]);

        [
            ("train", &self.train),
            ("query", &self.query),
            ("gallery", &self.gallery),
        ]
        .into_iter()
        .for_each(|(name, stat)| {
            table.add_row(row![
                name,
                r->stat.num_pids,
                r->stat.num_images,
                r->stat.num_cams
            ]);
        });

        table
    }

    /// Print the statistics table to stdout.
    pub fn print(&self) {
        println!("Dataset statistics:");
        self.to_table().printstd();
    }
}

impl fmt::Display for DatasetStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_table())
    }
}
