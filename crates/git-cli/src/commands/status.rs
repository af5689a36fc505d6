use std::collections::BTreeSet;

use anyhow::Result;
use git_ref::RefName;
use git_repository::Repository;

pub fn run(repo: Repository) -> Result<i32> {
    let head = RefName::new("HEAD")?;
    match repo.refs().get_ref(&head, false)?.as_symbolic() {
        Some(branch) => println!("On branch {}", branch.short_name()),
        None => println!("HEAD detached at {}", repo.get_oid("HEAD")?.to_hex()),
    }

    let head_tree = repo.get_commit(&repo.get_oid("HEAD")?)?.tree;
    let committed = git_tree::get_tree(repo.odb(), &head_tree, "")?;
    let working = git_tree::get_working_directory(repo.root(), repo.odb(), repo.ignore())?;

    let paths: BTreeSet<&String> = committed.keys().chain(working.keys()).collect();
    let mut clean = true;
    for path in paths {
        match (committed.get(path), working.get(path)) {
            (Some(_), None) => {
                println!("  deleted:    {path}");
                clean = false;
            }
            (None, Some(_)) => {
                println!("  new file:   {path}");
                clean = false;
            }
            (Some(a), Some(b)) if a != b => {
                println!("  modified:   {path}");
                clean = false;
            }
            _ => {}
        }
    }

    if clean {
        println!("nothing to commit, working tree clean");
    }

    Ok(0)
}
