use anyhow::{bail, Result};
use git_object::ObjectType;
use git_ref::{RefName, RefValue};
use git_repository::Repository;

pub fn run(repo: Repository, target: String) -> Result<i32> {
    let oid = repo.get_oid(&target)?;
    let (obj_type, _) = repo.odb().header(&oid)?;
    let commit_oid = match obj_type {
        ObjectType::Commit => oid,
        _ => bail!("{} is not a commit", oid.to_hex()),
    };
    let tree = repo.get_commit(&commit_oid)?.tree;

    git_tree::read_tree(repo.root(), &tree, repo.odb(), repo.ignore())?;

    let head = RefName::new("HEAD")?;
    let branch = RefName::new(format!("refs/heads/{target}"))?;
    if !repo.refs().get_ref(&branch, false)?.is_absent() {
        repo.refs().update_ref(&head, &RefValue::Symbolic(branch), false)?;
    } else {
        repo.refs().update_ref(&head, &RefValue::Direct(commit_oid), false)?;
    }

    Ok(0)
}
