use std::collections::BTreeSet;
use std::io::Write;

use anyhow::Result;
use git_repository::Repository;

pub fn run(repo: Repository, target: Option<String>) -> Result<i32> {
    let oid = repo.get_oid(target.as_deref().unwrap_or("HEAD"))?;
    let tree = repo.get_commit(&oid)?.tree;

    let committed = git_tree::get_tree(repo.odb(), &tree, "")?;
    let working = git_tree::get_working_directory(repo.root(), repo.odb(), repo.ignore())?;

    let paths: BTreeSet<&String> = committed.keys().chain(working.keys()).collect();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for path in paths {
        let a = committed.get(path);
        let b = working.get(path);
        if a != b {
            let patch = git_diff::diff_files(repo.odb(), a, b, path)?;
            out.write_all(&patch)?;
        }
    }

    Ok(0)
}
