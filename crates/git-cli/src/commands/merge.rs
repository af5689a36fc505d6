use anyhow::Result;
use git_repository::{MergeOutcome, Repository};

pub fn run(repo: Repository, target: String) -> Result<i32> {
    let oid = repo.get_oid(&target)?;
    match repo.merge(oid)? {
        MergeOutcome::FastForward => println!("Fast-forward"),
        MergeOutcome::Merged => {
            println!("Merge made; commit the result to finish, or resolve conflicts first.")
        }
    }
    Ok(0)
}
