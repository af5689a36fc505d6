use anyhow::Result;
use git_ref::{RefName, RefValue};
use git_repository::Repository;

pub fn run(repo: Repository, name: String, target: Option<String>) -> Result<i32> {
    let oid = repo.get_oid(target.as_deref().unwrap_or("HEAD"))?;
    let tag_ref = RefName::new(format!("refs/tags/{name}"))?;
    repo.refs().update_ref(&tag_ref, &RefValue::Direct(oid), false)?;
    Ok(0)
}
