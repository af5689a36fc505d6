use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// The set of path components the directory walk and working-directory
/// manager refuse to touch.
///
/// Loaded once from a `.egitignore` file (one name per line; a missing file
/// means an empty set) and held for the lifetime of a [`Repository`]. A
/// path is ignored iff *any* of its `/`-separated components matches a name
/// in this set — there is no glob support, no negation, and no nested
/// ignore files.
///
/// [`Repository`]: ../git_repository/struct.Repository.html
#[derive(Debug, Clone)]
pub struct IgnoreList {
    names: HashSet<String>,
}

/// The repository metadata directory is always ignored, regardless of
/// whether `.egitignore` names it explicitly.
const ALWAYS_IGNORED: &str = ".egit";

impl IgnoreList {
    /// Load from `<root>/.egitignore`. A missing file yields just the
    /// implicit `.egit` entry.
    pub fn load(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let ignore_path = root.as_ref().join(".egitignore");
        let mut names = HashSet::new();
        names.insert(ALWAYS_IGNORED.to_string());

        match fs::read_to_string(&ignore_path) {
            Ok(contents) => {
                for line in contents.lines() {
                    let line = line.trim();
                    if !line.is_empty() {
                        names.insert(line.to_string());
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }

        Ok(Self { names })
    }

    /// An ignore list with no names beyond the implicit `.egit` entry.
    pub fn empty() -> Self {
        let mut names = HashSet::new();
        names.insert(ALWAYS_IGNORED.to_string());
        Self { names }
    }

    /// Build directly from a set of names, without touching the filesystem.
    #[cfg(any(test, feature = "test-support"))]
    pub fn from_names(extra: impl IntoIterator<Item = String>) -> Self {
        let mut names = HashSet::new();
        names.insert(ALWAYS_IGNORED.to_string());
        names.extend(extra);
        Self { names }
    }

    /// Is `name` (a single path component) an ignored name?
    pub fn is_ignored_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Is any component of `path` (relative, `/`-separated or OS-separated)
    /// an ignored name?
    pub fn is_ignored_path(&self, path: &Path) -> bool {
        path.components().any(|c| {
            c.as_os_str()
                .to_str()
                .map(|s| self.is_ignored_name(s))
                .unwrap_or(false)
        })
    }

    /// Remove every entry whose path would resolve outside `base` were it
    /// not for ignore filtering. Present for symmetry with directory
    /// walking helpers; currently unused outside tests.
    #[cfg(test)]
    fn names_sorted(&self) -> Vec<String> {
        let mut v: Vec<_> = self.names.iter().cloned().collect();
        v.sort();
        v
    }
}

/// Join a base directory and a relative, `/`-separated path, used when
/// re-deriving filesystem paths from flattened tree paths.
pub fn join_relative(base: &Path, relative: &str) -> PathBuf {
    let mut out = base.to_path_buf();
    for component in relative.split('/') {
        out.push(component);
    }
    out
}
