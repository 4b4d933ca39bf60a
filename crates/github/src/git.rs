//! Repository root discovery and repository-relative paths.

use actionsmith_core::{Error, Result};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Find the git repository root directory containing `start_path`.
///
/// `start_path` may be a file; discovery starts from its directory.
///
/// # Errors
///
/// Returns an error if not in a git repository, or the repository is bare.
pub fn find_git_root(start_path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(start_path).map_err(|e| Error::io(start_path, e))?;
    let start_dir = if absolute.is_dir() {
        absolute.as_path()
    } else {
        absolute.parent().unwrap_or(absolute.as_path())
    };

    let repo = gix::discover(start_dir)
        .map_err(|e| Error::configuration(format!("Not in a git repository: {e}")))?;

    let workdir = repo
        .workdir()
        .ok_or_else(|| Error::configuration("Cannot operate in a bare repository"))?;

    debug!(root = %workdir.display(), "Discovered git root");
    Ok(workdir.to_path_buf())
}

/// Express `path` relative to `root`, with `/` separators.
///
/// An absolute path must lie under `root`. A relative path is resolved
/// against the current directory first; if that doesn't land under `root`
/// it is taken as already relative to `root`.
///
/// # Errors
///
/// Returns `Error::Configuration` if an absolute `path` is outside `root`.
pub fn relative_to_root(path: &Path, root: &Path) -> Result<String> {
    if path.is_absolute() {
        let relative = path.strip_prefix(root).map_err(|_| {
            Error::configuration(format!(
                "{} is outside the repository root {}",
                path.display(),
                root.display()
            ))
        })?;
        return Ok(to_slash_string(relative));
    }

    if let Ok(absolute) = std::path::absolute(path)
        && let Ok(relative) = absolute.strip_prefix(root)
    {
        return Ok(to_slash_string(relative));
    }

    Ok(to_slash_string(path))
}

/// Join path components with `/`, dropping `.` components.
fn to_slash_string(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::CurDir => None,
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::RootDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_kept() {
        let root = Path::new("/definitely/not/cwd/repo");
        assert_eq!(
            relative_to_root(Path::new("./src/build.main.kts"), root).unwrap(),
            "src/build.main.kts"
        );
    }

    #[test]
    fn test_absolute_path_under_root() {
        let root = Path::new("/work/repo");
        assert_eq!(
            relative_to_root(Path::new("/work/repo/.github/workflows/ci.main.kts"), root).unwrap(),
            ".github/workflows/ci.main.kts"
        );
    }

    #[test]
    fn test_absolute_path_outside_root() {
        let root = Path::new("/work/repo");
        let err = relative_to_root(Path::new("/elsewhere/ci.main.kts"), root).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("outside the repository root"));
    }

    #[test]
    fn test_relative_path_resolved_against_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let root = cwd.parent().unwrap_or(&cwd).to_path_buf();
        let expected_prefix = to_slash_string(cwd.strip_prefix(&root).unwrap());

        let relative = relative_to_root(Path::new("defs/ci.main.kts"), &root).unwrap();
        assert_eq!(relative, format!("{expected_prefix}/defs/ci.main.kts").trim_start_matches('/'));
    }

    /// Lay out a minimal git directory at `git_dir`
    fn write_git_dir(git_dir: &Path, bare: bool) {
        std::fs::create_dir_all(git_dir.join("objects")).unwrap();
        std::fs::create_dir_all(git_dir.join("refs/heads")).unwrap();
        std::fs::write(git_dir.join("HEAD"), "ref: refs/heads/main\n").unwrap();
        std::fs::write(
            git_dir.join("config"),
            format!("[core]\n\trepositoryformatversion = 0\n\tbare = {bare}\n"),
        )
        .unwrap();
    }

    #[test]
    fn test_find_git_root_from_nested_file() {
        let dir = tempfile::tempdir().unwrap();
        write_git_dir(&dir.path().join(".git"), false);
        let nested = dir.path().join(".github/workflows");
        std::fs::create_dir_all(&nested).unwrap();
        let source = nested.join("build.main.kts");
        std::fs::write(&source, "").unwrap();

        let root = find_git_root(&source).unwrap();
        assert_eq!(
            std::fs::canonicalize(root).unwrap(),
            std::fs::canonicalize(dir.path()).unwrap()
        );
    }

    #[test]
    fn test_find_git_root_bare_repository() {
        let dir = tempfile::tempdir().unwrap();
        write_git_dir(dir.path(), true);

        let err = find_git_root(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("bare repository"));
    }
}
