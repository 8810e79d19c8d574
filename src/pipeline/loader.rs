//! Line loader
//!
//! Reads every regular file directly inside a directory into one flat list of
//! lines. Files are visited in directory listing order (not sorted) and each
//! line keeps its `\n` terminator.

use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::core::error::{IoResultExt, JobError};
use crate::core::paths::display_path;

/// Load all lines of all files in `input_dir`
pub fn load_lines(input_dir: &Path) -> Result<Vec<String>, JobError> {
    let mut lines = Vec::new();
    let mut files = 0usize;

    for entry in WalkDir::new(input_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(input_dir).to_path_buf();
            JobError::io(&path, e.into())
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let before = lines.len();
        read_file_lines(entry.path(), &mut lines)?;
        files += 1;
        debug!(
            "read {} lines from {}",
            lines.len() - before,
            display_path(entry.path())
        );
    }

    info!(
        "loaded {} lines from {} files in {}",
        lines.len(),
        files,
        display_path(input_dir)
    );

    Ok(lines)
}

/// Append the lines of one UTF-8 file to `out`
fn read_file_lines(path: &Path, out: &mut Vec<String>) -> Result<(), JobError> {
    let bytes = fs::read(path).at(path)?;
    let content = String::from_utf8(bytes).map_err(|_| JobError::Encoding {
        path: path.to_path_buf(),
    })?;

    out.extend(split_lines(&content).map(str::to_string));
    Ok(())
}

/// Split text into lines, keeping each `\n`; the last line may lack one
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split_inclusive('\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_split_lines_keeps_terminators() {
        let lines: Vec<&str> = split_lines("a\nb\nc").collect();
        assert_eq!(lines, vec!["a\n", "b\n", "c"]);
    }

    #[test]
    fn test_split_lines_trailing_newline() {
        let lines: Vec<&str> = split_lines("Hola mundo\nHola, ChatGPT!\n").collect();
        assert_eq!(lines, vec!["Hola mundo\n", "Hola, ChatGPT!\n"]);
    }

    #[test]
    fn test_split_lines_empty() {
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn test_load_single_file_preserves_order() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "one\ntwo\nthree\n").unwrap();

        let lines = load_lines(temp.path()).unwrap();
        assert_eq!(lines, vec!["one\n", "two\n", "three\n"]);
    }

    #[test]
    fn test_load_multiple_files_keeps_file_line_order() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "a1\na2\n").unwrap();
        fs::write(temp.path().join("b.txt"), "b1\nb2").unwrap();

        let lines = load_lines(temp.path()).unwrap();
        assert_eq!(lines.len(), 4);

        // Files may come in any order, but each file's lines stay contiguous and ordered
        let a = lines.iter().position(|l| l == "a1\n").unwrap();
        assert_eq!(lines[a + 1], "a2\n");
        let b = lines.iter().position(|l| l == "b1\n").unwrap();
        assert_eq!(lines[b + 1], "b2");
    }

    #[test]
    fn test_empty_file_contributes_nothing() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("empty.txt"), "").unwrap();

        let lines = load_lines(temp.path()).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_non_utf8_file_is_fatal() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("good.txt"), "fine\n").unwrap();
        fs::write(temp.path().join("bad.txt"), [0x66, 0x6f, 0xff, 0xfe, 0x0a]).unwrap();

        let err = load_lines(temp.path()).unwrap_err();
        assert!(matches!(err, JobError::Encoding { .. }));
        assert!(err.path().ends_with("bad.txt"));
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let temp = tempdir().unwrap();
        let err = load_lines(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, JobError::Io { .. }));
    }

    #[test]
    fn test_subdirectories_are_skipped() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/inner.txt"), "hidden\n").unwrap();
        fs::write(temp.path().join("top.txt"), "visible\n").unwrap();

        let lines = load_lines(temp.path()).unwrap();
        assert_eq!(lines, vec!["visible\n"]);
    }
}
