use super::*;
use crate::common::*;

/// The generic re-identification dataset trait.
pub trait ImageDataset
where
    Self: Debug + Sync + Send,
{
    /// The name of the dataset directory.
    fn name(&self) -> &str;

    /// The training samples with contiguous identity labels.
    fn train(&self) -> &[Sample];

    /// The query samples with raw identity ids.
    fn query(&self) -> &[Sample];

    /// The gallery samples with raw identity ids.
    fn gallery(&self) -> &[Sample];

    fn statistics(&self) -> DatasetStatistics {
        DatasetStatistics::new(self.train(), self.query(), self.gallery())
    }
}
