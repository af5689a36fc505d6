use git_hash::ObjectId;
use git_ref::{RefName, RefValue};

use crate::{RepoError, Repository};

/// What a `merge` call actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// `other` was a descendant of HEAD; HEAD was simply moved forward.
    /// No merge commit was created.
    FastForward,
    /// Histories had diverged. `MERGE_HEAD` was written and the merged
    /// trees materialized into the working directory; a following
    /// `commit` call will produce the two-parent merge commit.
    Merged,
}

impl Repository {
    /// Merge `other` into the current branch.
    ///
    /// Resolves the merge base between HEAD and `other`. If that base is
    /// HEAD itself, this is a fast-forward: HEAD moves to `other` and no
    /// commit is created. Otherwise, `MERGE_HEAD` is set to `other` and the
    /// three-way merge of HEAD's tree, `other`'s tree, and the base's tree
    /// is materialized into the working directory, conflict markers and
    /// all; the caller is expected to follow up with `commit`.
    pub fn merge(&self, other: ObjectId) -> Result<MergeOutcome, RepoError> {
        let head_name = RefName::new("HEAD")?;
        let head = self
            .refs
            .get_ref(&head_name, true)?
            .as_oid()
            .ok_or_else(|| RepoError::UnknownRef("HEAD".to_string()))?;

        let base = git_revwalk::merge_base(&self.odb, &head, &other)?;

        if base == Some(head) {
            self.refs
                .update_ref(&head_name, &RefValue::Direct(other), true)?;
            return Ok(MergeOutcome::FastForward);
        }

        let merge_head = RefName::new("MERGE_HEAD")?;
        self.refs
            .update_ref(&merge_head, &RefValue::Direct(other), false)?;

        let head_tree = self.get_commit(&head)?.tree;
        let other_tree = self.get_commit(&other)?.tree;
        let base_tree = match base {
            Some(base_oid) => self.get_commit(&base_oid)?.tree,
            // Disjoint histories: merge against an empty tree, so every path
            // on either side looks like an independent addition.
            None => self.odb.put(git_object::ObjectType::Tree, b"")?,
        };

        let merged = git_diff::merge_trees(&self.odb, &head_tree, &other_tree, &base_tree)?;

        git_tree::empty_current_directory(&self.root, &self.ignore)?;
        for (path, bytes) in merged {
            let dest = self.root.join(&path);
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&dest, bytes)?;
        }

        Ok(MergeOutcome::Merged)
    }
}
