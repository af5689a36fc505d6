use anyhow::Result;
use git_repository::Repository;

pub fn run(repo: Repository, first: String, second: String) -> Result<i32> {
    let a = repo.get_oid(&first)?;
    let b = repo.get_oid(&second)?;

    match git_revwalk::merge_base(repo.odb(), &a, &b)? {
        Some(base) => {
            println!("{}", base.to_hex());
            Ok(0)
        }
        None => Ok(1),
    }
}
