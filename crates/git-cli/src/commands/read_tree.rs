use anyhow::{bail, Result};
use git_object::ObjectType;
use git_repository::Repository;

pub fn run(repo: Repository, tree: String) -> Result<i32> {
    let oid = repo.get_oid(&tree)?;
    let (obj_type, _) = repo.odb().header(&oid)?;

    let tree_oid = match obj_type {
        ObjectType::Tree => oid,
        ObjectType::Commit => repo.get_commit(&oid)?.tree,
        ObjectType::Blob => bail!("{} is a blob, not a tree-ish", oid.to_hex()),
    };

    git_tree::read_tree(repo.root(), &tree_oid, repo.odb(), repo.ignore())?;
    Ok(0)
}
