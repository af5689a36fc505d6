use std::path::PathBuf;

use anyhow::Result;
use git_repository::Repository;

pub fn run(path: Option<PathBuf>) -> Result<i32> {
    let target = match path {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    std::fs::create_dir_all(&target)?;

    let repo = Repository::init(&target)?;

    let git_dir = std::fs::canonicalize(repo.git_dir()).unwrap_or_else(|_| repo.git_dir());
    println!("Initialized empty repository in {}", git_dir.display());

    Ok(0)
}
