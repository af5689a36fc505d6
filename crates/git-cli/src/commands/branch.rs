use anyhow::Result;
use git_ref::{RefName, RefValue};
use git_repository::Repository;

pub fn run(repo: Repository, name: Option<String>) -> Result<i32> {
    match name {
        Some(name) => {
            let oid = repo.get_oid("HEAD")?;
            let branch_ref = RefName::new(format!("refs/heads/{name}"))?;
            repo.refs().update_ref(&branch_ref, &RefValue::Direct(oid), false)?;
        }
        None => {
            let head = RefName::new("HEAD")?;
            let current = repo.refs().get_ref(&head, false)?.as_symbolic().map(|r| r.to_string());

            for (name, _) in repo.refs().iter_refs("refs/heads/", false)? {
                let marker = if Some(name.to_string()) == current { "* " } else { "  " };
                println!("{marker}{}", name.short_name());
            }
        }
    }
    Ok(0)
}
