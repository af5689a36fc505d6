use git_hash::ObjectId;
use git_object::{Commit, ObjectType};
use git_ref::{RefName, RefValue};

use crate::{RepoError, Repository};

impl Repository {
    /// Snapshot the working directory and record it as a new commit.
    ///
    /// The first parent is HEAD's resolved OID, if any; the second is
    /// `MERGE_HEAD`'s value, if a merge is in progress. `HEAD` is updated
    /// with `deref=true`, so a symbolic HEAD advances the branch it points
    /// at rather than becoming a direct ref itself. A consumed `MERGE_HEAD`
    /// is deleted afterward.
    pub fn commit(&self, message: impl Into<bstr::BString>) -> Result<ObjectId, RepoError> {
        let tree = git_tree::write_tree(&self.root, &self.odb, &self.ignore)?;

        let head_name = RefName::new("HEAD")?;
        let head_value = self.refs.get_ref(&head_name, true)?;

        let mut parents = Vec::new();
        if let Some(head_oid) = head_value.as_oid() {
            parents.push(head_oid);
        }

        let merge_head_name = RefName::new("MERGE_HEAD")?;
        let merge_head_value = self.refs.get_ref(&merge_head_name, false)?;
        if let Some(other_oid) = merge_head_value.as_oid() {
            parents.push(other_oid);
        }

        let commit = Commit {
            tree,
            parents,
            message: message.into(),
        };
        let oid = self.odb.put(ObjectType::Commit, &commit.serialize_content())?;

        self.refs
            .update_ref(&head_name, &RefValue::Direct(oid), true)?;

        if !merge_head_value.is_absent() {
            self.refs.delete_ref(&merge_head_name, false)?;
        }

        Ok(oid)
    }

    /// Fetch and parse the commit at `oid`.
    pub fn get_commit(&self, oid: &ObjectId) -> Result<Commit, RepoError> {
        let content = self.odb.content(oid)?;
        Ok(Commit::parse(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn first_commit_is_rootless_and_moves_master() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        fs::write(dir.path().join("a.txt"), b"hi\n").unwrap();

        let oid = repo.commit("first").unwrap();
        let commit = repo.get_commit(&oid).unwrap();
        assert!(commit.parents.is_empty());
        assert_eq!(commit.message.as_bytes(), b"first");

        let master = RefName::new("refs/heads/master").unwrap();
        assert_eq!(repo.refs().get_ref(&master, false).unwrap().as_oid(), Some(oid));

        let head = RefName::new("HEAD").unwrap();
        // HEAD itself is still symbolic -- only the branch moved.
        assert!(repo.refs().get_ref(&head, false).unwrap().is_symbolic());
        assert_eq!(repo.refs().get_ref(&head, true).unwrap().as_oid(), Some(oid));
    }

    #[test]
    fn second_commit_has_first_as_parent() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        fs::write(dir.path().join("a.txt"), b"hi\n").unwrap();
        let first = repo.commit("first").unwrap();

        fs::write(dir.path().join("a.txt"), b"bye\n").unwrap();
        let second = repo.commit("second").unwrap();

        let commit = repo.get_commit(&second).unwrap();
        assert_eq!(commit.parents, vec![first]);
    }

    #[test]
    fn idempotent_commit_without_changes_has_same_tree() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        fs::write(dir.path().join("a.txt"), b"hi\n").unwrap();

        let first = repo.commit("first").unwrap();
        let second = repo.commit("second").unwrap();

        let c1 = repo.get_commit(&first).unwrap();
        let c2 = repo.get_commit(&second).unwrap();
        assert_eq!(c1.tree, c2.tree);
    }

    #[test]
    fn commit_with_merge_head_produces_two_parents_and_clears_it() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        fs::write(dir.path().join("a.txt"), b"hi\n").unwrap();
        let first = repo.commit("first").unwrap();

        fs::write(dir.path().join("b.txt"), b"other\n").unwrap();
        let other_tree = git_tree::write_tree(repo.root(), repo.odb(), repo.ignore()).unwrap();
        let other_commit = Commit {
            tree: other_tree,
            parents: vec![first],
            message: "other".into(),
        };
        let other_oid = repo
            .odb()
            .put(ObjectType::Commit, &other_commit.serialize_content())
            .unwrap();

        let merge_head = RefName::new("MERGE_HEAD").unwrap();
        repo.refs()
            .update_ref(&merge_head, &RefValue::Direct(other_oid), false)
            .unwrap();

        let merged = repo.commit("merge").unwrap();
        let commit = repo.get_commit(&merged).unwrap();
        assert_eq!(commit.parents, vec![first, other_oid]);
        assert!(repo.refs().get_ref(&merge_head, false).unwrap().is_absent());
    }
}
