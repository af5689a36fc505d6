use std::collections::BTreeMap;

use git_hash::ObjectId;
use git_odb::ObjectStore;

use crate::compare::compare_trees;
use crate::subprocess::{run_collaborator, write_temp};
use crate::DiffError;

/// Three-way merge two blobs against their common ancestor, delegating to
/// the external diff3-style collaborator. Any side missing (file created
/// independently on one branch, or absent from the base) is treated as
/// empty content.
///
/// Returns the merged byte stream as-is, conflict markers included when
/// there were overlapping changes — this output is written straight to the
/// working directory by `merge_trees`'s caller, *not* re-hashed into the
/// object store (see the design ledger for why this is intentional).
pub fn merge_blobs(
    odb: &ObjectStore,
    head_oid: Option<&ObjectId>,
    other_oid: Option<&ObjectId>,
    base_oid: Option<&ObjectId>,
) -> Result<Vec<u8>, DiffError> {
    let head_content = read_or_empty(odb, head_oid)?;
    let other_content = read_or_empty(odb, other_oid)?;
    let base_content = read_or_empty(odb, base_oid)?;

    let head_file = write_temp(&head_content)?;
    let base_file = write_temp(&base_content)?;
    let other_file = write_temp(&other_content)?;

    let head_path = head_file.path().to_string_lossy().into_owned();
    let base_path = base_file.path().to_string_lossy().into_owned();
    let other_path = other_file.path().to_string_lossy().into_owned();

    let args = [
        "--text",
        "-m",
        "-L",
        "HEAD",
        "-L",
        "BASE",
        "-L",
        "MERGE_HEAD",
        &head_path,
        &base_path,
        &other_path,
    ];

    // diff3 -m exits 0 (clean merge) or 1 (conflicts, markers embedded);
    // both are acceptable outcomes.
    run_collaborator("diff3", &args, &[0, 1])
}

fn read_or_empty(odb: &ObjectStore, oid: Option<&ObjectId>) -> Result<Vec<u8>, DiffError> {
    match oid {
        Some(oid) => Ok(odb.content(oid)?),
        None => Ok(Vec::new()),
    }
}

/// Merge every path in the union of `head`, `other`, and `base` trees,
/// returning a `path -> merged bytes` map ready for materialization onto
/// the working directory.
pub fn merge_trees(
    odb: &ObjectStore,
    head: &ObjectId,
    other: &ObjectId,
    base: &ObjectId,
) -> Result<BTreeMap<String, Vec<u8>>, DiffError> {
    let rows = compare_trees(odb, &[*head, *other, *base])?;
    let mut out = BTreeMap::new();
    for row in rows {
        let head_oid = row.oids[0].as_ref();
        let other_oid = row.oids[1].as_ref();
        let base_oid = row.oids[2].as_ref();
        let merged = merge_blobs(odb, head_oid, other_oid, base_oid)?;
        out.insert(row.path, merged);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use git_object::ObjectType;

    fn store() -> (tempfile::TempDir, ObjectStore) {
        let dir = tempfile::tempdir().unwrap();
        let odb = ObjectStore::open(dir.path().join("objects"));
        (dir, odb)
    }

    #[test]
    fn non_conflicting_changes_merge_cleanly() {
        let (_d, odb) = store();
        let base = odb.put(ObjectType::Blob, b"line1\nline2\nline3\n").unwrap();
        let head = odb
            .put(ObjectType::Blob, b"line1 changed\nline2\nline3\n")
            .unwrap();
        let other = odb
            .put(ObjectType::Blob, b"line1\nline2\nline3 changed\n")
            .unwrap();

        let merged = merge_blobs(&odb, Some(&head), Some(&other), Some(&base)).unwrap();
        let text = String::from_utf8_lossy(&merged);
        assert!(text.contains("line1 changed"));
        assert!(text.contains("line3 changed"));
        assert!(!text.contains("<<<<<<<"));
    }

    #[test]
    fn conflicting_changes_embed_markers() {
        let (_d, odb) = store();
        let base = odb.put(ObjectType::Blob, b"line1\n").unwrap();
        let head = odb.put(ObjectType::Blob, b"head version\n").unwrap();
        let other = odb.put(ObjectType::Blob, b"other version\n").unwrap();

        let merged = merge_blobs(&odb, Some(&head), Some(&other), Some(&base)).unwrap();
        let text = String::from_utf8_lossy(&merged);
        assert!(text.contains("<<<<<<<"));
        assert!(text.contains(">>>>>>>"));
    }
}
