use super::*;
use crate::{
    common::*,
    config::{DatasetConfig, LabelOrder},
    error::DatasetError,
};

const DATASET_DIR: &str = "VRIC";
const TRAIN_DIR: &str = "train_images";
const QUERY_DIR: &str = "probe_images";
const GALLERY_DIR: &str = "gallery_images";
const TRAIN_ANNOTATION_FILE: &str = "vric_train.txt";
const QUERY_ANNOTATION_FILE: &str = "vric_probe.txt";
const GALLERY_ANNOTATION_FILE: &str = "vric_gallery.txt";

/// Vehicle Re-Identification in Context (VRIC) dataset.
///
/// Reference: Kanaci, A., Zhu, X., Gong, S.: Vehicle Re-Identification in
/// Context. German Conference on Pattern Recognition (2018).
/// <https://qmul-vric.github.io/>
///
/// The full release has 2811 train identities with 54808 images and 2811
/// test identities with 5622 images.
#[derive(Debug, Clone)]
pub struct VricDataset {
    pub config: DatasetConfig,
    pub layout: VricLayout,
    pub annotations: AnnotationMap,
    pub train: Vec<Sample>,
    pub query: Vec<Sample>,
    pub gallery: Vec<Sample>,
    pub train_report: ScanReport,
    pub query_report: ScanReport,
    pub gallery_report: ScanReport,
    pub statistics: DatasetStatistics,
}

impl ImageDataset for VricDataset {
    fn name(&self) -> &str {
        DATASET_DIR
    }

    fn train(&self) -> &[Sample] {
        &self.train
    }

    fn query(&self) -> &[Sample] {
        &self.query
    }

    fn gallery(&self) -> &[Sample] {
        &self.gallery
    }

    fn statistics(&self) -> DatasetStatistics {
        self.statistics
    }
}

impl VricDataset {
    pub fn load(config: &DatasetConfig) -> Result<Self> {
        let layout = VricLayout::new(&config.root);

        // check directories before reading annotations
        layout.check()?;

        // load annotations
        let annotations = AnnotationMap::load(layout.annotation_files())?;
        debug!(
            "loaded {} annotations from '{}'",
            annotations.len(),
            layout.dataset_dir.display()
        );

        // scan image directories
        let ScanOutput {
            samples: train,
            report: train_report,
        } = process_dir(
            &annotations,
            &layout.train_dir,
            config.scan_limit,
            Some(config.label_order),
        )?;
        let ScanOutput {
            samples: query,
            report: query_report,
        } = process_dir(&annotations, &layout.query_dir, config.scan_limit, None)?;
        let ScanOutput {
            samples: gallery,
            report: gallery_report,
        } = process_dir(&annotations, &layout.gallery_dir, config.scan_limit, None)?;

        let statistics = DatasetStatistics::new(&train, &query, &gallery);

        if config.verbose {
            info!("=> {} loaded", DATASET_DIR);
            statistics.print();
        }

        Ok(Self {
            config: config.clone(),
            layout,
            annotations,
            train,
            query,
            gallery,
            train_report,
            query_report,
            gallery_report,
            statistics,
        })
    }

    pub fn num_train_pids(&self) -> usize {
        self.statistics.train.num_pids
    }

    pub fn num_train_imgs(&self) -> usize {
        self.statistics.train.num_images
    }

    pub fn num_train_cams(&self) -> usize {
        self.statistics.train.num_cams
    }

    pub fn num_train_vids(&self) -> usize {
        self.statistics.train.num_vids
    }

    pub fn num_query_pids(&self) -> usize {
        self.statistics.query.num_pids
    }

    pub fn num_query_imgs(&self) -> usize {
        self.statistics.query.num_images
    }

    pub fn num_query_cams(&self) -> usize {
        self.statistics.query.num_cams
    }

    pub fn num_query_vids(&self) -> usize {
        self.statistics.query.num_vids
    }

    pub fn num_gallery_pids(&self) -> usize {
        self.statistics.gallery.num_pids
    }

    pub fn num_gallery_imgs(&self) -> usize {
        self.statistics.gallery.num_images
    }

    pub fn num_gallery_cams(&self) -> usize {
        self.statistics.gallery.num_cams
    }

    pub fn num_gallery_vids(&self) -> usize {
        self.statistics.gallery.num_vids
    }
}

/// The paths of the VRIC dataset under a root directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VricLayout {
    pub dataset_dir: PathBuf,
    pub train_dir: PathBuf,
    pub query_dir: PathBuf,
    pub gallery_dir: PathBuf,
}

impl VricLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let dataset_dir = root.as_ref().join(DATASET_DIR);
        Self {
            train_dir: dataset_dir.join(TRAIN_DIR),
            query_dir: dataset_dir.join(QUERY_DIR),
            gallery_dir: dataset_dir.join(GALLERY_DIR),
            dataset_dir,
        }
    }

    /// Check if all directories are available before going deeper.
    pub fn check(&self) -> Result<(), DatasetError> {
        [
            &self.dataset_dir,
            &self.train_dir,
            &self.query_dir,
            &self.gallery_dir,
        ]
        .into_iter()
        .try_for_each(|path| {
            if path.exists() {
                Ok(())
            } else {
                Err(DatasetError::Unavailable {
                    path: path.to_owned(),
                })
            }
        })
    }

    /// The annotation files in ingestion order.
    pub fn annotation_files(&self) -> [PathBuf; 3] {
        [
            self.dataset_dir.join(TRAIN_ANNOTATION_FILE),
            self.dataset_dir.join(QUERY_ANNOTATION_FILE),
            self.dataset_dir.join(GALLERY_ANNOTATION_FILE),
        ]
    }
}

/// The anomalies observed while scanning an image directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// The number of images without an annotation entry.
    pub num_unannotated: usize,
    /// The raw camera ids of annotated images, including junk images.
    pub camids: BTreeSet<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput {
    pub samples: Vec<Sample>,
    pub report: ScanReport,
}

/// Join the `*.jpg` images in a directory to their annotations.
///
/// Junk images and images without annotations are dropped. If `relabel`
/// is given, identities are replaced by contiguous labels assigned in that
/// order. Camera ids are shifted to start from 0.
pub fn process_dir(
    annotations: &AnnotationMap,
    dir: impl AsRef<Path>,
    scan_limit: Option<NonZeroUsize>,
    relabel: Option<LabelOrder>,
) -> Result<ScanOutput> {
    let dir = dir.as_ref();
    let image_paths = list_jpg_files(dir, scan_limit)?;

    let pid2label: Option<HashMap<i64, i64>> = relabel.map(|order| {
        let pids = image_paths
            .iter()
            .filter_map(|path| annotations.lookup(path))
            .filter(|annotation| !annotation.is_junk())
            .map(|annotation| annotation.pid);
        let pids: Vec<i64> = match order {
            LabelOrder::Sorted => pids.collect::<BTreeSet<_>>().into_iter().collect(),
            LabelOrder::FirstSeen => pids.collect::<IndexSet<_>>().into_iter().collect(),
        };
        pids.into_iter()
            .enumerate()
            .map(|(label, pid)| (pid, label as i64))
            .collect()
    });

    let mut report = ScanReport::default();
    let mut samples = vec![];

    for image_path in image_paths {
        let Annotation { pid, camid } = match annotations.lookup(&image_path) {
            Some(annotation) => *annotation,
            None => {
                report.num_unannotated += 1;
                continue;
            }
        };
        report.camids.insert(camid);

        // junk images are just ignored
        if pid == JUNK_PID {
            continue;
        }

        let pid = match &pid2label {
            Some(pid2label) => pid2label[&pid],
            None => pid,
        };

        samples.push(Sample {
            image_path,
            pid,
            camid: camid - 1,
            instance: DEFAULT_INSTANCE,
        });
    }

    if report.num_unannotated > 0 {
        warn!(
            "{} images without annotations in '{}'",
            report.num_unannotated,
            dir.display()
        );
    }
    info!("camera ids in '{}': {:?}", dir.display(), report.camids);

    Ok(ScanOutput { samples, report })
}
