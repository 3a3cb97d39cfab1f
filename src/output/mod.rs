//! Output path generation
//!
//! Export targets are named `<stem>_cut_<N>.mp4` next to the source file,
//! with `N` one past the highest existing sibling. No locking: the tool is
//! single-process, single-export-at-a-time.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FrameCutError, FrameCutResult};

/// Generate the next free output path for `source_path`.
///
/// Scans the source's directory for `<stem>_cut_<N>.mp4` siblings and
/// returns max N + 1; gaps in the numbering are ignored.
pub fn generate_output_path(source_path: &Path) -> FrameCutResult<PathBuf> {
    let stem = source_path
        .file_stem()
        .ok_or_else(|| FrameCutError::InvalidSourcePath {
            path: source_path.to_path_buf(),
        })?
        .to_string_lossy();

    let dir = source_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let prefix = format!("{stem}_cut_");
    let mut max_num: u32 = 0;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if let Some(num) = parse_cut_number(&name, &prefix) {
            max_num = max_num.max(num);
        }
    }

    Ok(dir.join(format!("{prefix}{}.mp4", max_num + 1)))
}

/// Extract N from a `<prefix><N>.mp4` file name, if it matches exactly
fn parse_cut_number(name: &str, prefix: &str) -> Option<u32> {
    let digits = name.strip_prefix(prefix)?.strip_suffix(".mp4")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempfile::TempDir;

    use super::*;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn first_export_gets_number_one() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("movie.mp4");
        touch(dir.path(), "movie.mp4");

        let output = generate_output_path(&source).unwrap();
        assert_eq!(output, dir.path().join("movie_cut_1.mp4"));
    }

    #[test]
    fn numbering_continues_past_max_ignoring_gaps() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("foo.mp4");
        touch(dir.path(), "foo.mp4");
        touch(dir.path(), "foo_cut_1.mp4");
        touch(dir.path(), "foo_cut_3.mp4");

        let output = generate_output_path(&source).unwrap();
        assert_eq!(output, dir.path().join("foo_cut_4.mp4"));
    }

    #[test]
    fn unrelated_siblings_are_ignored() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("foo.mp4");
        touch(dir.path(), "foo.mp4");
        touch(dir.path(), "bar_cut_7.mp4");
        touch(dir.path(), "foo_cut_abc.mp4");
        touch(dir.path(), "foo_cut_2.mkv");

        let output = generate_output_path(&source).unwrap();
        assert_eq!(output, dir.path().join("foo_cut_1.mp4"));
    }

    #[test]
    fn cut_number_parsing_is_strict() {
        assert_eq!(parse_cut_number("foo_cut_12.mp4", "foo_cut_"), Some(12));
        assert_eq!(parse_cut_number("foo_cut_.mp4", "foo_cut_"), None);
        assert_eq!(parse_cut_number("foo_cut_+3.mp4", "foo_cut_"), None);
        assert_eq!(parse_cut_number("foo_cut_3.mp4.bak", "foo_cut_"), None);
    }
}
