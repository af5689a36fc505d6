use git_hash::ObjectId;
use git_odb::ObjectStore;

use crate::compare::compare_trees;
use crate::subprocess::{run_collaborator, write_temp};
use crate::DiffError;

/// Diff two blobs (by OID, either of which may be absent), delegating to
/// the external unified-diff collaborator. `path` is used to build the
/// conventional `a/<path>` / `b/<path>` labels.
///
/// An absent OID is treated as an empty buffer, matching how `diff_trees`
/// represents a created or deleted file.
pub fn diff_files(
    odb: &ObjectStore,
    oid_a: Option<&ObjectId>,
    oid_b: Option<&ObjectId>,
    path: &str,
) -> Result<Vec<u8>, DiffError> {
    let content_a = match oid_a {
        Some(oid) => odb.content(oid)?,
        None => Vec::new(),
    };
    let content_b = match oid_b {
        Some(oid) => odb.content(oid)?,
        None => Vec::new(),
    };

    let file_a = write_temp(&content_a)?;
    let file_b = write_temp(&content_b)?;

    let label_a = format!("a/{path}");
    let label_b = format!("b/{path}");
    let path_a = file_a.path().to_string_lossy().into_owned();
    let path_b = file_b.path().to_string_lossy().into_owned();

    let args = vec![
        "--text",
        "--unified",
        "--label",
        &label_a,
        "--label",
        &label_b,
        &path_a,
        &path_b,
    ];

    // diff exits 0 (no differences) or 1 (differences found); both are
    // normal outcomes here, only >=2 signals a real collaborator failure.
    run_collaborator("diff", &args, &[0, 1])
}

/// Concatenate `diff_files` for every path where trees `a` and `b` differ.
pub fn diff_trees(odb: &ObjectStore, a: &ObjectId, b: &ObjectId) -> Result<Vec<u8>, DiffError> {
    let rows = compare_trees(odb, &[*a, *b])?;
    let mut out = Vec::new();
    for row in rows {
        let (before, after) = (row.oids[0], row.oids[1]);
        if before == after {
            continue;
        }
        let chunk = diff_files(odb, before.as_ref(), after.as_ref(), &row.path)?;
        out.extend_from_slice(&chunk);
    }
    Ok(out)
}
