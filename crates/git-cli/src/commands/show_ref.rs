use anyhow::Result;
use git_repository::Repository;

pub fn run(repo: Repository) -> Result<i32> {
    for (name, value) in repo.refs().iter_refs("", false)? {
        if let Some(oid) = value.as_oid() {
            println!("{} {name}", oid.to_hex());
        }
    }
    Ok(0)
}
