use std::collections::HashSet;

use git_hash::ObjectId;
use git_odb::ObjectStore;

use crate::walk::iter_commits_and_parents;
use crate::RevWalkError;

/// The first commit that appears in the ancestry of both `c1` and `c2`:
/// walk from `c1`, and return the first OID in that walk that also
/// appears anywhere in the walk from `c2`. Returns `None` when the
/// histories are disjoint.
///
/// This naive nested-iteration approach is O(n) in the size of `c1`'s
/// ancestry plus `c2`'s, which is fine at the scale this store is built
/// for.
pub fn merge_base(
    odb: &ObjectStore,
    c1: &ObjectId,
    c2: &ObjectId,
) -> Result<Option<ObjectId>, RevWalkError> {
    let from_c1 = iter_commits_and_parents(odb, [*c1])?;
    let from_c2: HashSet<ObjectId> = iter_commits_and_parents(odb, [*c2])?.into_iter().collect();

    Ok(from_c1.into_iter().find(|oid| from_c2.contains(oid)))
}
