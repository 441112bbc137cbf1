use super::*;
use crate::{common::*, error::DatasetError};

/// The lookup table from image file names to annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationMap {
    entries: HashMap<String, Annotation>,
}

impl AnnotationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read annotation files in order. Entries from later files replace
    /// earlier ones with the same image name.
    pub fn load<I, P>(files: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut map = Self::new();
        for file in files {
            map.extend_from_file(file)?;
        }
        Ok(map)
    }

    pub fn extend_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read annotation file '{}'", path.display()))?;
        self.extend_from_str(path, &text)?;
        Ok(())
    }

    /// Parse annotation text. The `path` is only used in error messages.
    pub fn extend_from_str(&mut self, path: impl AsRef<Path>, text: &str) -> Result<()> {
        let path = path.as_ref();

        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let (name, annotation) =
                parse_line(line).map_err(|reason| DatasetError::MalformedAnnotation {
                    path: path.to_owned(),
                    line: index + 1,
                    reason,
                })?;
            self.entries.insert(name, annotation);
        }

        Ok(())
    }

    pub fn get(&self, image_name: &str) -> Option<&Annotation> {
        self.entries.get(image_name)
    }

    /// Find the annotation of an image file by its file name.
    pub fn lookup(&self, image_path: impl AsRef<Path>) -> Option<&Annotation> {
        let name = image_path.as_ref().file_name()?.to_str()?;
        self.get(name)
    }

    pub fn insert(&mut self, image_name: impl Into<String>, annotation: Annotation) {
        self.entries.insert(image_name.into(), annotation);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_line(line: &str) -> Result<(String, Annotation), String> {
    let fields: Vec<_> = line.split_whitespace().collect();
    let (image, pid, camid) = match *fields.as_slice() {
        [image, pid, camid] => (image, pid, camid),
        _ => return Err(format!("expect 3 fields, but found {}", fields.len())),
    };

    let name = Path::new(image)
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("'{}' has no file name", image))?
        .to_owned();
    let pid: i64 = pid
        .parse()
        .map_err(|_| format!("invalid identity id '{}'", pid))?;
    let camid: i64 = camid
        .parse()
        .map_err(|_| format!("invalid camera id '{}'", camid))?;
    if camid < 1 {
        return Err(format!("camera id must start from 1, but found {}", camid));
    }

    Ok((name, Annotation { pid, camid }))
}
