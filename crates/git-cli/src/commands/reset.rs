use anyhow::Result;
use git_ref::{RefName, RefValue};
use git_repository::Repository;

pub fn run(repo: Repository, target: String) -> Result<i32> {
    let oid = repo.get_oid(&target)?;
    let head = RefName::new("HEAD")?;
    repo.refs().update_ref(&head, &RefValue::Direct(oid), true)?;
    Ok(0)
}
