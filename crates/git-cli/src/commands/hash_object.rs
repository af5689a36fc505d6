use std::path::PathBuf;

use anyhow::Result;
use git_object::ObjectType;
use git_repository::Repository;

pub fn run(repo: Repository, file: PathBuf, write: bool) -> Result<i32> {
    let data = std::fs::read(&file)?;
    let oid = if write {
        repo.odb().put(ObjectType::Blob, &data)?
    } else {
        git_hash::Hasher::hash_object(ObjectType::Blob.as_str(), &data)
    };
    println!("{}", oid.to_hex());
    Ok(0)
}
