use std::collections::BTreeMap;

use bstr::ByteSlice;
use git_hash::ObjectId;
use git_object::{ObjectType, Tree, TreeEntry};
use git_odb::ObjectStore;

use crate::TreeError;

/// One shallow entry of a tree, as yielded by [`iterate_tree`].
pub struct Entry {
    pub obj_type: ObjectType,
    pub oid: ObjectId,
    pub name: String,
}

fn validate_entry_name(name: &str) -> Result<(), TreeError> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
    {
        return Err(TreeError::InvalidEntryName(name.to_string()));
    }
    Ok(())
}

fn load_tree(odb: &ObjectStore, tree_oid: &ObjectId) -> Result<Tree, TreeError> {
    let content = odb.content(tree_oid)?;
    Ok(Tree::parse(&content)?)
}

/// A single, non-recursive level of a tree: `(type, oid, filename)` per
/// entry, in the order stored (filename-sorted, per [`Tree::serialize_content`]).
pub fn iterate_tree(odb: &ObjectStore, tree_oid: &ObjectId) -> Result<Vec<Entry>, TreeError> {
    let tree = load_tree(odb, tree_oid)?;
    let mut out = Vec::with_capacity(tree.entries.len());
    for TreeEntry {
        obj_type,
        oid,
        name,
        ..
    } in tree.entries
    {
        let name = name.to_str().map_err(|_| {
            TreeError::InvalidEntryName(String::from_utf8_lossy(name.as_bytes()).into_owned())
        })?;
        validate_entry_name(name)?;
        out.push(Entry {
            obj_type,
            oid,
            name: name.to_string(),
        });
    }
    Ok(out)
}

/// Recursively flatten a tree into a `path -> blob OID` mapping, with
/// `/`-joined relative paths (no trailing slash on leaves, no entries for
/// intermediate directories themselves).
pub fn get_tree(
    odb: &ObjectStore,
    tree_oid: &ObjectId,
    base_path: &str,
) -> Result<BTreeMap<String, ObjectId>, TreeError> {
    let mut out = BTreeMap::new();
    collect(odb, tree_oid, base_path, &mut out)?;
    Ok(out)
}

fn collect(
    odb: &ObjectStore,
    tree_oid: &ObjectId,
    base_path: &str,
    out: &mut BTreeMap<String, ObjectId>,
) -> Result<(), TreeError> {
    for entry in iterate_tree(odb, tree_oid)? {
        let full_path = if base_path.is_empty() {
            entry.name.clone()
        } else {
            format!("{base_path}/{}", entry.name)
        };
        match entry.obj_type {
            ObjectType::Tree => collect(odb, &entry.oid, &full_path, out)?,
            ObjectType::Blob => {
                out.insert(full_path, entry.oid);
            }
            ObjectType::Commit => {
                return Err(TreeError::InvalidEntryName(format!(
                    "unexpected commit entry '{}' in tree",
                    entry.name
                )))
            }
        }
    }
    Ok(())
}
