use crate::common::*;

/// The identity id marking images unusable for identity matching.
pub const JUNK_PID: i64 = -1;

/// The value of [Sample::instance] for every loaded sample.
pub const DEFAULT_INSTANCE: usize = 1;

/// The identity and camera of an image as written in annotation files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Annotation {
    pub pid: i64,
    /// The camera id, starting from 1.
    pub camid: i64,
}

impl Annotation {
    pub fn is_junk(&self) -> bool {
        self.pid == JUNK_PID
    }
}

/// An image sample in a dataset partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sample {
    pub image_path: PathBuf,
    /// The identity id. It is a contiguous label in the train partition.
    pub pid: i64,
    /// The camera id, starting from 0.
    pub camid: i64,
    pub instance: usize,
}
