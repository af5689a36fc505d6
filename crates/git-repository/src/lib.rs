//! The repository facade: initialization, the commit model (C5), name
//! resolution (C7), and merge orchestration over the lower-level object
//! store, ref store, tree codec, history walker, and diff engine.

mod commit;
mod error;
mod merge;
mod resolve;

pub use error::RepoError;
pub use merge::MergeOutcome;

use std::path::{Path, PathBuf};

use git_odb::ObjectStore;
use git_ref::{RefName, RefStore, RefValue};
use git_tree::IgnoreList;

/// The metadata directory name, analogous to `.git`.
const GIT_DIR: &str = ".egit";

/// The branch `HEAD` points at in a freshly initialized repository.
const DEFAULT_BRANCH: &str = "refs/heads/master";

/// A handle to an opened repository: its working directory root, object
/// store, ref store, and ignore list, all loaded once and threaded
/// explicitly through every operation — there is no hidden global state.
pub struct Repository {
    root: PathBuf,
    odb: ObjectStore,
    refs: RefStore,
    ignore: IgnoreList,
}

impl Repository {
    /// Create a new repository rooted at `root`: an empty object store, a
    /// fresh ref store with `HEAD` symbolic to `refs/heads/master` (which
    /// is not required to exist yet), and no other state.
    pub fn init(root: impl AsRef<Path>) -> Result<Self, RepoError> {
        let root = root.as_ref().to_path_buf();
        let git_dir = root.join(GIT_DIR);
        if git_dir.is_dir() {
            return Err(RepoError::AlreadyExists(root));
        }

        std::fs::create_dir_all(git_dir.join("objects"))?;
        std::fs::create_dir_all(git_dir.join("refs/heads"))?;
        std::fs::create_dir_all(git_dir.join("refs/tags"))?;

        let refs = RefStore::new(&git_dir);
        let head = RefName::new("HEAD")?;
        let master = RefName::new(DEFAULT_BRANCH)?;
        refs.update_ref(&head, &RefValue::Symbolic(master), false)?;

        Self::open(root)
    }

    /// Open an already-initialized repository at `root`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, RepoError> {
        let root = root.as_ref().to_path_buf();
        let git_dir = root.join(GIT_DIR);
        if !git_dir.is_dir() {
            return Err(RepoError::NotFound(root));
        }

        let odb = ObjectStore::open(git_dir.join("objects"));
        let refs = RefStore::new(&git_dir);
        let ignore = IgnoreList::load(&root)?;

        Ok(Self {
            root,
            odb,
            refs,
            ignore,
        })
    }

    /// The working directory this repository is rooted at.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `.egit` metadata directory.
    pub fn git_dir(&self) -> PathBuf {
        self.root.join(GIT_DIR)
    }

    pub fn odb(&self) -> &ObjectStore {
        &self.odb
    }

    pub fn refs(&self) -> &RefStore {
        &self.refs
    }

    pub fn ignore(&self) -> &IgnoreList {
        &self.ignore
    }
}
