use std::collections::BTreeSet;

use git_hash::ObjectId;
use git_odb::ObjectStore;
use git_tree::get_tree;

use crate::DiffError;

/// What kind of change a path underwent between two trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAction {
    Created,
    Deleted,
    Modified,
}

/// One row of a tree comparison: a path, and the OID (if present) it names
/// in each input tree, in the same order the trees were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub path: String,
    pub oids: Vec<Option<ObjectId>>,
}

/// Flatten every tree in `trees`, then produce one row per path in the
/// union of all of them, with `None` where a tree doesn't have that path.
/// Row order is stable within a call (paths are visited lexicographically)
/// but otherwise unspecified.
pub fn compare_trees(
    odb: &ObjectStore,
    trees: &[ObjectId],
) -> Result<Vec<ComparisonRow>, DiffError> {
    let flattened: Vec<_> = trees
        .iter()
        .map(|oid| get_tree(odb, oid, ""))
        .collect::<Result<_, _>>()?;

    let mut paths: BTreeSet<&str> = BTreeSet::new();
    for map in &flattened {
        paths.extend(map.keys().map(String::as_str));
    }

    let mut rows = Vec::with_capacity(paths.len());
    for path in paths {
        let oids = flattened
            .iter()
            .map(|map| map.get(path).copied())
            .collect();
        rows.push(ComparisonRow {
            path: path.to_string(),
            oids,
        });
    }
    Ok(rows)
}

/// For every path that differs between `old` and `new`, report whether it
/// was created, deleted, or modified.
pub fn iter_changed_files(
    odb: &ObjectStore,
    old: &ObjectId,
    new: &ObjectId,
) -> Result<Vec<(String, ChangeAction)>, DiffError> {
    let rows = compare_trees(odb, &[*old, *new])?;
    let mut out = Vec::new();
    for row in rows {
        let (before, after) = (row.oids[0], row.oids[1]);
        let action = match (before, after) {
            (None, Some(_)) => ChangeAction::Created,
            (Some(_), None) => ChangeAction::Deleted,
            (Some(a), Some(b)) if a != b => ChangeAction::Modified,
            _ => continue,
        };
        out.push((row.path, action));
    }
    Ok(out)
}
