use std::io::Write;

use anyhow::{bail, Result};
use bstr::ByteSlice;
use git_object::Object;
use git_repository::Repository;

pub fn run(repo: Repository, object: String, pretty: bool, show_type: bool) -> Result<i32> {
    let oid = repo.get_oid(&object)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if show_type {
        let (obj_type, _) = repo.odb().header(&oid)?;
        writeln!(out, "{obj_type}")?;
        return Ok(0);
    }

    let content = repo.odb().content(&oid)?;
    let (obj_type, _) = repo.odb().header(&oid)?;
    let obj = Object::parse_content(obj_type, &content)?;

    if !pretty {
        bail!("usage: cat-file (-t | -p) <object>");
    }

    pretty_print(&obj, &mut out)?;
    Ok(0)
}

fn pretty_print(obj: &Object, out: &mut impl Write) -> Result<()> {
    match obj {
        Object::Blob(blob) => {
            out.write_all(&blob.data)?;
        }
        Object::Tree(tree) => {
            let mut entries = tree.entries.clone();
            entries.sort_by(|a, b| a.name.cmp(&b.name));
            for entry in entries {
                writeln!(
                    out,
                    "{:06o} {} {}\t{}",
                    entry.mode.raw(),
                    entry.obj_type,
                    entry.oid.to_hex(),
                    entry.name.as_bstr(),
                )?;
            }
        }
        Object::Commit(commit) => {
            writeln!(out, "tree {}", commit.tree.to_hex())?;
            for parent in &commit.parents {
                writeln!(out, "commit {}", parent.to_hex())?;
            }
            writeln!(out)?;
            out.write_all(&commit.message)?;
        }
    }
    Ok(())
}
