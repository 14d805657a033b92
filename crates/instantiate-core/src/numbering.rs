//! Sequence numbering for project directories.
//!
//! The parent directory is the ledger: every immediate subdirectory whose name
//! starts with exactly `width` ASCII digits followed by a separator counts as a
//! numbered project.
//!
//! ```text
//! parent/
//! ├── 00-intro/      # 0
//! ├── 03-foo/        # 3
//! ├── 003-bar/       # ignored for width 2 (three leading digits)
//! ├── notes/         # ignored
//! └── 07-report.txt  # ignored (not a directory)
//! ```
//!
//! For the layout above with width 2, the next number is 4.

use std::path::Path;

use crate::error::Result;

/// Width used when the caller does not specify one.
pub const DEFAULT_WIDTH: usize = 2;

/// Return the next free project number under `parent`.
///
/// Scans immediate subdirectories, takes the largest conforming prefix and
/// returns it plus one. Returns 0 when nothing conforms, when `parent` does
/// not exist, or when `width` is 0 (numbering disabled).
pub fn next_project_number(parent: &Path, width: usize) -> Result<u64> {
    if width == 0 || !parent.exists() {
        return Ok(0);
    }

    let mut max: Option<u64> = None;
    for entry in std::fs::read_dir(parent)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() && !entry.path().is_dir() {
            continue;
        }

        let name = entry.file_name();
        match parse_prefix(name.as_encoded_bytes(), width) {
            Some(n) => {
                tracing::trace!("found numbered project {:?} ({n})", entry.path());
                max = Some(max.map_or(n, |m| m.max(n)));
            }
            None => tracing::trace!("ignoring non-conforming entry {:?}", entry.path()),
        }
    }

    Ok(max.map_or(0, |m| m.saturating_add(1)))
}

/// Extract the `width`-digit prefix of a raw directory name, if it conforms.
///
/// The prefix must be followed by a non-digit separator, so `b"03"` and
/// `b"003-x"` do not conform at width 2. Bytes after the separator are never
/// inspected, so names that are not valid UTF-8 still count.
pub fn parse_prefix(name: &[u8], width: usize) -> Option<u64> {
    if width == 0 || name.len() <= width {
        return None;
    }
    let (digits, rest) = name.split_at(width);
    if !digits.iter().all(u8::is_ascii_digit) || rest[0].is_ascii_digit() {
        return None;
    }
    digits.iter().try_fold(0u64, |acc, d| {
        acc.checked_mul(10)?.checked_add(u64::from(d - b'0'))
    })
}

/// Zero-pad `number` to `width` digits. Width 0 yields an empty string.
pub fn format_number(number: u64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    format!("{number:0width$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InstantiateError;

    fn mkdirs(parent: &Path, names: &[&str]) {
        for name in names {
            std::fs::create_dir_all(parent.join(name)).unwrap();
        }
    }

    #[test]
    fn test_empty_parent_starts_at_zero() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(next_project_number(dir.path(), 2).unwrap(), 0);
    }

    #[test]
    fn test_missing_parent_starts_at_zero() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert_eq!(next_project_number(&missing, 2).unwrap(), 0);
    }

    #[test]
    fn test_next_after_max() {
        let dir = tempfile::tempdir().unwrap();
        mkdirs(dir.path(), &["00-intro", "03-foo", "01-bar"]);
        assert_eq!(next_project_number(dir.path(), 2).unwrap(), 4);
    }

    #[test]
    fn test_ignores_non_conforming_entries() {
        let dir = tempfile::tempdir().unwrap();
        mkdirs(dir.path(), &["02-ok", "notes", "9-short", "003-wide", "07", "ab-cd"]);
        std::fs::write(dir.path().join("11-file.txt"), "not a directory").unwrap();
        assert_eq!(next_project_number(dir.path(), 2).unwrap(), 3);
    }

    #[test]
    fn test_only_non_conforming_starts_at_zero() {
        let dir = tempfile::tempdir().unwrap();
        mkdirs(dir.path(), &["homework", "lecture-notes"]);
        assert_eq!(next_project_number(dir.path(), 2).unwrap(), 0);
    }

    #[test]
    fn test_duplicate_numbers_are_fine() {
        let dir = tempfile::tempdir().unwrap();
        mkdirs(dir.path(), &["05-a", "05-b"]);
        assert_eq!(next_project_number(dir.path(), 2).unwrap(), 6);
    }

    #[test]
    fn test_width_three() {
        let dir = tempfile::tempdir().unwrap();
        mkdirs(dir.path(), &["010-x", "99-y"]);
        assert_eq!(next_project_number(dir.path(), 3).unwrap(), 11);
    }

    #[test]
    fn test_width_zero_disables_numbering() {
        let dir = tempfile::tempdir().unwrap();
        mkdirs(dir.path(), &["05-a"]);
        assert_eq!(next_project_number(dir.path(), 0).unwrap(), 0);
    }

    #[test]
    fn test_parse_prefix_separators() {
        assert_eq!(parse_prefix(b"04-foo", 2), Some(4));
        assert_eq!(parse_prefix(b"04_foo", 2), Some(4));
        assert_eq!(parse_prefix(b"04 foo", 2), Some(4));
        assert_eq!(parse_prefix(b"04", 2), None);
        assert_eq!(parse_prefix(b"004-foo", 2), None);
        assert_eq!(parse_prefix(b"4-foo", 2), None);
        assert_eq!(parse_prefix(b"", 2), None);
    }

    #[test]
    fn test_parse_prefix_overflow_ignored() {
        assert_eq!(parse_prefix(b"99999999999999999999999-x", 23), None);
    }

    #[test]
    fn test_parse_prefix_ignores_bytes_after_separator() {
        assert_eq!(parse_prefix(b"05-caf\xe9", 2), Some(5));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_directory_still_counts() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(OsStr::from_bytes(b"05-caf\xe9"))).unwrap();
        assert_eq!(next_project_number(dir.path(), 2).unwrap(), 6);
    }

    #[test]
    fn test_parent_that_is_a_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, "plain file").unwrap();

        let err = next_project_number(&file, 2).unwrap_err();
        assert!(matches!(err, InstantiateError::Io(_)));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0, 2), "00");
        assert_eq!(format_number(4, 3), "004");
        assert_eq!(format_number(123, 2), "123");
        assert_eq!(format_number(7, 0), "");
    }
}
