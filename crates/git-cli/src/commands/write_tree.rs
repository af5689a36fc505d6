use anyhow::Result;
use git_repository::Repository;

pub fn run(repo: Repository) -> Result<i32> {
    let oid = git_tree::write_tree(repo.root(), repo.odb(), repo.ignore())?;
    println!("{}", oid.to_hex());
    Ok(0)
}
