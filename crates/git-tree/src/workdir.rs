use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use git_hash::ObjectId;
use git_object::ObjectType;
use git_odb::ObjectStore;

use crate::ignore::join_relative;
use crate::{get_tree, IgnoreList, TreeError};

/// Wipe out everything in `root` that isn't ignored, leaving ignored paths
/// (and their containing directories) alone.
///
/// Walks bottom-up: files are removed outright, and a directory removal is
/// attempted only after everything inside it has been handled — but a
/// failed `rmdir` (the directory still has ignored children in it) is
/// swallowed rather than propagated. This can hide partial failures; it is
/// intentional, not a bug to quietly fix.
pub fn empty_current_directory(root: impl AsRef<Path>, ignore: &IgnoreList) -> Result<(), TreeError> {
    let root = root.as_ref();
    empty_dir(root, root, ignore)
}

fn empty_dir(root: &Path, dir: &Path, ignore: &IgnoreList) -> Result<(), TreeError> {
    let mut entries: Vec<_> = match fs::read_dir(dir) {
        Ok(it) => it.collect::<Result<_, _>>()?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let rel = path.strip_prefix(root).unwrap_or(&path);
        if ignore.is_ignored_path(rel) {
            continue;
        }

        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            empty_dir(root, &path, ignore)?;
            // Non-empty (ignored children remain) -> swallow the error.
            let _ = fs::remove_dir(&path);
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// Empty `root`, then materialize every `(path, blob_oid)` in `tree_oid`
/// onto the filesystem, creating parent directories as needed.
///
/// I/O failures partway through leave the working directory in whatever
/// state it reached — materialization is not transactional.
pub fn read_tree(
    root: impl AsRef<Path>,
    tree_oid: &ObjectId,
    odb: &ObjectStore,
    ignore: &IgnoreList,
) -> Result<(), TreeError> {
    let root = root.as_ref();
    empty_current_directory(root, ignore)?;

    let files = get_tree(odb, tree_oid, "")?;
    for (path, blob_oid) in files {
        let dest = join_relative(root, &path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = odb.content(&blob_oid)?;
        fs::write(&dest, data)?;
    }
    Ok(())
}

/// Walk `root`, skipping ignored paths, hashing every file as a blob
/// (writing each into `odb` so later reads can find it by OID) and
/// returning the `path -> blob OID` map this produced.
pub fn get_working_directory(
    root: impl AsRef<Path>,
    odb: &ObjectStore,
    ignore: &IgnoreList,
) -> Result<BTreeMap<String, ObjectId>, TreeError> {
    let root = root.as_ref();
    let mut out = BTreeMap::new();
    walk(root, root, odb, ignore, &mut out)?;
    Ok(out)
}

fn walk(
    root: &Path,
    dir: &Path,
    odb: &ObjectStore,
    ignore: &IgnoreList,
    out: &mut BTreeMap<String, ObjectId>,
) -> Result<(), TreeError> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let rel = path.strip_prefix(root).unwrap_or(&path);
        if ignore.is_ignored_path(rel) {
            continue;
        }

        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            walk(root, &path, odb, ignore, out)?;
        } else if file_type.is_file() {
            let data = fs::read(&path)?;
            let oid = odb.put(ObjectType::Blob, &data)?;
            let rel_str = rel.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/");
            out.insert(rel_str, oid);
        }
    }
    Ok(())
}
