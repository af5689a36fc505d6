use anyhow::Result;
use bstr::ByteSlice;
use git_repository::Repository;

pub fn run(repo: Repository, start: Option<String>) -> Result<i32> {
    let start_oid = repo.get_oid(start.as_deref().unwrap_or("HEAD"))?;
    let order = git_revwalk::iter_commits_and_parents(repo.odb(), [start_oid])?;

    for oid in order {
        let commit = repo.get_commit(&oid)?;
        println!("commit {}", oid.to_hex());
        for line in commit.message.to_str_lossy().lines() {
            println!("    {line}");
        }
        println!();
    }

    Ok(0)
}
