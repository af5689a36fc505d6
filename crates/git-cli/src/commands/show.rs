use std::io::Write;

use anyhow::Result;
use bstr::ByteSlice;
use git_object::ObjectType;
use git_repository::Repository;

pub fn run(repo: Repository, target: Option<String>) -> Result<i32> {
    let oid = repo.get_oid(target.as_deref().unwrap_or("HEAD"))?;
    let commit = repo.get_commit(&oid)?;

    println!("commit {}", oid.to_hex());
    for line in commit.message.to_str_lossy().lines() {
        println!("    {line}");
    }
    println!();

    let parent_tree = match commit.first_parent() {
        Some(parent) => repo.get_commit(parent)?.tree,
        None => repo.odb().put(ObjectType::Tree, b"")?,
    };

    let patch = git_diff::diff_trees(repo.odb(), &parent_tree, &commit.tree)?;
    std::io::stdout().write_all(&patch)?;

    Ok(0)
}
