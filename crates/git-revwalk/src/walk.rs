use std::collections::{HashSet, VecDeque};

use git_hash::ObjectId;
use git_object::Commit;
use git_odb::ObjectStore;

use crate::RevWalkError;

/// Fetch and parse the commit at `oid`.
pub(crate) fn get_commit(odb: &ObjectStore, oid: &ObjectId) -> Result<Commit, RevWalkError> {
    let content = odb.content(oid)?;
    Ok(Commit::parse(&content)?)
}

/// Visit every commit reachable from `starts` exactly once, in an order
/// that walks each mainline depth-first before returning to a merge's
/// other parents.
///
/// Seeds a deque with the start OIDs; repeatedly pops the front; skips it
/// if already visited; otherwise marks it visited, records it, fetches its
/// commit, pushes its first parent onto the **front** of the deque
/// (continuing the mainline depth-first) and its remaining parents onto
/// the **back** (breadth-first across merge branches). The result never
/// contains the same OID twice, even if the input graph is corrupt and
/// cyclic.
pub fn iter_commits_and_parents(
    odb: &ObjectStore,
    starts: impl IntoIterator<Item = ObjectId>,
) -> Result<Vec<ObjectId>, RevWalkError> {
    let mut queue: VecDeque<ObjectId> = starts.into_iter().collect();
    let mut visited: HashSet<ObjectId> = HashSet::new();
    let mut order = Vec::new();

    while let Some(oid) = queue.pop_front() {
        if oid.is_null() || visited.contains(&oid) {
            continue;
        }
        visited.insert(oid);
        order.push(oid);

        let commit = get_commit(odb, &oid)?;
        let mut parents = commit.parents.into_iter();
        if let Some(first) = parents.next() {
            queue.push_front(first);
        }
        for rest in parents {
            queue.push_back(rest);
        }
    }

    Ok(order)
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

    fn put_commit(odb: &ObjectStore, tree: ObjectId, parents: Vec<ObjectId>, msg: &str) -> ObjectId {
        let commit = Commit {
            tree,
            parents,
            message: msg.into(),
        };
        odb.put(ObjectType::Commit, &commit.serialize_content())
            .unwrap()
    }

    fn dummy_tree(odb: &ObjectStore) -> ObjectId {
        odb.put(ObjectType::Tree, b"").unwrap()
    }

    #[test]
    fn linear_history_visits_newest_first() {
        let (_d, odb) = store();
        let tree = dummy_tree(&odb);
        let c1 = put_commit(&odb, tree, vec![], "first");
        let c2 = put_commit(&odb, tree, vec![c1], "second");
        let c3 = put_commit(&odb, tree, vec![c2], "third");

        let order = iter_commits_and_parents(&odb, [c3]).unwrap();
        assert_eq!(order, vec![c3, c2, c1]);
    }

    #[test]
    fn merge_commit_visits_first_parent_before_second() {
        let (_d, odb) = store();
        let tree = dummy_tree(&odb);
        let base = put_commit(&odb, tree, vec![], "base");
        let mainline = put_commit(&odb, tree, vec![base], "mainline");
        let feature = put_commit(&odb, tree, vec![base], "feature");
        let merge = put_commit(&odb, tree, vec![mainline, feature], "merge");

        let order = iter_commits_and_parents(&odb, [merge]).unwrap();
        assert_eq!(order, vec![merge, mainline, base, feature]);
    }

    #[test]
    fn each_commit_visited_at_most_once() {
        let (_d, odb) = store();
        let tree = dummy_tree(&odb);
        let base = put_commit(&odb, tree, vec![], "base");
        let left = put_commit(&odb, tree, vec![base], "left");
        let right = put_commit(&odb, tree, vec![base], "right");
        let merge = put_commit(&odb, tree, vec![left, right], "merge");

        let order = iter_commits_and_parents(&odb, [merge]).unwrap();
        let mut seen = HashSet::new();
        for oid in &order {
            assert!(seen.insert(*oid), "commit visited twice: {oid}");
        }
        assert_eq!(order.len(), 4);
    }

    #[test]
    fn multiple_start_points_are_all_walked() {
        let (_d, odb) = store();
        let tree = dummy_tree(&odb);
        let c1 = put_commit(&odb, tree, vec![], "first");
        let c2 = put_commit(&odb, tree, vec![c1], "second");
        let unrelated = put_commit(&odb, tree, vec![], "unrelated");

        let order = iter_commits_and_parents(&odb, [c2, unrelated]).unwrap();
        assert!(order.contains(&c2));
        assert!(order.contains(&c1));
        assert!(order.contains(&unrelated));
        assert_eq!(order.len(), 3);
    }
}
