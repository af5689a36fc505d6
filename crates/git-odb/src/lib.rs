//! The object store (C1): a loose, content-addressed store of blobs,
//! trees, and commits.
//!
//! Every object lives at `objects/XX/YYYY...` where `XX` is the first hex
//! byte of its OID and `YYYY...` is the rest, exactly as in
//! [`ObjectId::loose_path`]. Objects are written uncompressed — no zlib
//! framing, no packfiles, no alternates. This is a deliberately smaller
//! object database than a real git implementation's: a single flat
//! namespace, opened once per repository.

mod enumerate;
mod error;
mod read;
mod write;

pub use enumerate::ObjectIter;
pub use error::OdbError;

use std::path::{Path, PathBuf};

use git_hash::ObjectId;

/// Handle to the object store rooted at a repository's `objects/` directory.
pub struct ObjectStore {
    objects_dir: PathBuf,
}

impl ObjectStore {
    /// Open the store at the given `objects/` directory. Does not create
    /// the directory — callers that need it to exist should create it
    /// during repository initialization.
    pub fn open(objects_dir: impl AsRef<Path>) -> Self {
        Self {
            objects_dir: objects_dir.as_ref().to_path_buf(),
        }
    }

    /// The file path a given OID would live at: `objects_dir/xx/yyyy...`.
    pub fn object_path(&self, oid: &ObjectId) -> PathBuf {
        self.objects_dir.join(oid.loose_path())
    }

    /// The objects directory this store was opened on.
    pub fn objects_dir(&self) -> &Path {
        &self.objects_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_path_matches_fan_out_layout() {
        let store = ObjectStore::open("/tmp/objects");
        let oid = ObjectId::from_hex("da39a3ee5e6b4b0d3255bfef95601890afd80709").unwrap();
        let path = store.object_path(&oid);
        assert_eq!(
            path,
            PathBuf::from("/tmp/objects/da/39a3ee5e6b4b0d3255bfef95601890afd80709")
        );
    }
}
