use crate::common::*;
use glob::MatchOptions;

/// List `*.jpg` files directly under a directory in glob order, keeping at
/// most `limit` paths if given. Hidden files are not matched.
pub fn list_jpg_files(dir: impl AsRef<Path>, limit: Option<NonZeroUsize>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let pattern = format!(
        "{}/*.jpg",
        glob::Pattern::escape(
            dir.to_str()
                .ok_or_else(|| format_err!("non-UTF-8 path '{}'", dir.display()))?
        )
    );
    let limit = limit.map(NonZeroUsize::get).unwrap_or(usize::MAX);

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let paths: Vec<_> = glob::glob_with(&pattern, options)?
        .take(limit)
        .map(|result| result.with_context(|| format!("failed to scan '{}'", dir.display())))
        .collect::<Result<_>>()?;
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_jpg_files_test() -> Result<()> {
        let dir = tempfile::tempdir()?;
        for name in ["c.jpg", ".0.jpg", "a.jpg", "b.png", "b.jpg", "d.JPG"] {
            fs::write(dir.path().join(name), b"")?;
        }
        fs::create_dir(dir.path().join("nested"))?;
        fs::write(dir.path().join("nested").join("e.jpg"), b"")?;

        let names = |paths: Vec<PathBuf>| -> Vec<String> {
            paths
                .iter()
                .map(|path| path.file_name().unwrap().to_str().unwrap().to_owned())
                .collect()
        };

        let all = list_jpg_files(dir.path(), None)?;
        assert_eq!(names(all), ["a.jpg", "b.jpg", "c.jpg"]);

        let capped = list_jpg_files(dir.path(), NonZeroUsize::new(2))?;
        assert_eq!(names(capped), ["a.jpg", "b.jpg"]);
        Ok(())
    }
}
