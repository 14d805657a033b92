//! Recursive copy of a template tree into a fresh destination.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{InstantiateError, Result};

/// Copy every file and directory under `template_root` into `destination`.
///
/// The destination must not exist; if it does, nothing is written. Relative
/// paths are preserved and empty directories are recreated. Returns the number
/// of files copied.
pub fn copy_tree(template_root: &Path, destination: &Path) -> Result<u64> {
    check_template_dir(template_root)?;
    if destination.exists() {
        return Err(InstantiateError::AlreadyExists(destination.to_path_buf()));
    }

    let mut copied = 0;
    for entry in WalkDir::new(template_root)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(template_root) else {
            tracing::warn!("skipping {} (outside template root)", entry.path().display());
            continue;
        };
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            tracing::trace!("mkdir {}", target.display());
            std::fs::create_dir_all(&target)?;
        } else {
            tracing::trace!("copy {} -> {}", entry.path().display(), target.display());
            std::fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    tracing::debug!(
        "copied {copied} files from {} to {}",
        template_root.display(),
        destination.display()
    );
    Ok(copied)
}

/// Require `template_root` to be an existing directory.
pub fn check_template_dir(template_root: &Path) -> Result<()> {
    match std::fs::metadata(template_root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(InstantiateError::NotFound {
            path: template_root.to_path_buf(),
            source: None,
        }),
        Err(e) => Err(InstantiateError::not_found(template_root, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_template(root: &Path) {
        std::fs::create_dir_all(root.join("subdir")).unwrap();
        std::fs::create_dir_all(root.join("empty")).unwrap();
        std::fs::write(root.join("one"), "{{ project.name }}").unwrap();
        std::fs::write(root.join("two"), "second").unwrap();
        std::fs::write(root.join("subdir/a"), "nested").unwrap();
    }

    #[test]
    fn test_copies_structure() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template");
        make_template(&template);
        let dst = dir.path().join("out");

        let copied = copy_tree(&template, &dst).unwrap();

        assert_eq!(copied, 3);
        assert!(dst.join("one").is_file());
        assert!(dst.join("two").is_file());
        assert!(dst.join("subdir").is_dir());
        assert!(dst.join("empty").is_dir());
        assert_eq!(std::fs::read_to_string(dst.join("subdir/a")).unwrap(), "nested");
    }

    #[test]
    fn test_template_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template");
        make_template(&template);

        copy_tree(&template, &dir.path().join("out")).unwrap();

        assert_eq!(
            std::fs::read_to_string(template.join("one")).unwrap(),
            "{{ project.name }}"
        );
    }

    #[test]
    fn test_existing_destination_rejected_without_writes() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template");
        make_template(&template);
        let dst = dir.path().join("out");
        std::fs::create_dir_all(&dst).unwrap();
        std::fs::write(dst.join("keep"), "mine").unwrap();

        let err = copy_tree(&template, &dst).unwrap_err();

        assert!(matches!(err, InstantiateError::AlreadyExists(_)));
        let entries: Vec<_> = std::fs::read_dir(&dst).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(std::fs::read_to_string(dst.join("keep")).unwrap(), "mine");
    }

    #[test]
    fn test_missing_template_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = copy_tree(&dir.path().join("nope"), &dir.path().join("out")).unwrap_err();
        assert!(matches!(err, InstantiateError::NotFound { source: Some(_), .. }));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_template_that_is_a_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("template.txt");
        std::fs::write(&file, "not a tree").unwrap();

        let err = copy_tree(&file, &dir.path().join("out")).unwrap_err();
        assert!(matches!(err, InstantiateError::NotFound { source: None, .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_copied_as_real_content() {
        use crate::substitution::{substitute_tree, SkipPatterns};
        use crate::templates::renderer::TemplateRenderer;

        let dir = tempfile::tempdir().unwrap();
        let shared = dir.path().join("shared");
        std::fs::create_dir_all(&shared).unwrap();
        std::fs::write(shared.join("license.txt"), "(c) {{ project.name }}").unwrap();
        let template = dir.path().join("template");
        std::fs::create_dir_all(&template).unwrap();
        std::os::unix::fs::symlink(&shared, template.join("common")).unwrap();
        let dst = dir.path().join("out");

        let copied = copy_tree(&template, &dst).unwrap();

        assert_eq!(copied, 1);
        let linked = dst.join("common");
        assert!(!std::fs::symlink_metadata(&linked).unwrap().file_type().is_symlink());
        assert!(linked.is_dir());

        let context = serde_json::json!({ "project": { "name": "demo" } });
        substitute_tree(&dst, &TemplateRenderer::new(), &context, &SkipPatterns::default()).unwrap();
        assert_eq!(
            std::fs::read_to_string(linked.join("license.txt")).unwrap(),
            "(c) demo"
        );
        assert_eq!(
            std::fs::read_to_string(shared.join("license.txt")).unwrap(),
            "(c) {{ project.name }}"
        );
    }
}
