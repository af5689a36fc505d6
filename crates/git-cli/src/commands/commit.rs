use anyhow::Result;
use git_repository::Repository;

pub fn run(repo: Repository, message: String) -> Result<i32> {
    let oid = repo.commit(message)?;
    println!("{}", oid.to_hex());
    Ok(0)
}
