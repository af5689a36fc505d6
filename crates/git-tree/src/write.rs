use std::fs;
use std::path::Path;

use bstr::BString;
use git_hash::ObjectId;
use git_object::{FileMode, ObjectType, Tree, TreeEntry};
use git_odb::ObjectStore;

use crate::{IgnoreList, TreeError};

/// Scan `directory`, recursing into subdirectories and hashing files as
/// blobs, and store the resulting tree object (and every blob/subtree it
/// references). Returns the root tree's OID.
///
/// Entries named in `ignore` are skipped entirely — they never appear in
/// the emitted tree. Directory-scan order doesn't matter:
/// [`Tree::serialize_content`] sorts by filename before hashing, so the
/// resulting OID is stable regardless of what order the filesystem hands
/// entries back in.
pub fn write_tree(
    directory: impl AsRef<Path>,
    odb: &ObjectStore,
    ignore: &IgnoreList,
) -> Result<ObjectId, TreeError> {
    let directory = directory.as_ref();
    let mut entries = Vec::new();

    let mut dir_entries: Vec<_> = fs::read_dir(directory)?.collect::<Result<_, _>>()?;
    dir_entries.sort_by_key(|e| e.file_name());

    for entry in dir_entries {
        let name = entry.file_name();
        let Some(name_str) = name.to_str() else {
            continue;
        };
        if ignore.is_ignored_name(name_str) {
            continue;
        }

        let path = entry.path();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            let sub_oid = write_tree(&path, odb, ignore)?;
            entries.push(TreeEntry {
                mode: FileMode::Tree,
                obj_type: ObjectType::Tree,
                oid: sub_oid,
                name: BString::from(name_str),
            });
        } else if file_type.is_file() {
            let data = fs::read(&path)?;
            let oid = odb.put(ObjectType::Blob, &data)?;
            entries.push(TreeEntry {
                mode: FileMode::Regular,
                obj_type: ObjectType::Blob,
                oid,
                name: BString::from(name_str),
            });
        }
        // Symlinks and other special files are neither walked nor hashed;
        // there's no tree entry kind for them.
    }

    let tree = Tree { entries };
    let oid = odb.put(ObjectType::Tree, &tree.serialize_content())?;
    Ok(oid)
}
