mod branch;
mod cat_file;
mod checkout;
mod commit;
mod diff;
mod hash_object;
mod init;
mod log;
mod merge;
mod merge_base;
mod read_tree;
mod reset;
mod show;
mod show_ref;
mod status;
mod tag;
mod write_tree;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use git_repository::Repository;

use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty repository
    Init {
        /// Directory to create the repository in (defaults to the current one)
        path: Option<PathBuf>,
    },
    /// Compute an object's ID, optionally writing it to the object store
    HashObject {
        file: PathBuf,
        #[arg(short = 'w')]
        write: bool,
    },
    /// Print the contents or type of an object
    CatFile {
        object: String,
        #[arg(short = 'p', conflicts_with = "show_type")]
        pretty: bool,
        #[arg(short = 't')]
        show_type: bool,
    },
    /// Write the working directory out as a tree object
    WriteTree,
    /// Materialize a tree object into the working directory
    ReadTree { tree: String },
    /// Record a snapshot of the working directory
    Commit {
        #[arg(short = 'm', long)]
        message: String,
    },
    /// Show commit history
    Log {
        /// Start walking from this commit or ref (defaults to HEAD)
        start: Option<String>,
    },
    /// Switch the working directory and HEAD to a commit or branch
    Checkout { target: String },
    /// Create a tag pointing at a commit
    Tag { name: String, target: Option<String> },
    /// List or create branches
    Branch { name: Option<String> },
    /// Show what's changed in the working directory since HEAD
    Status,
    /// Show a commit's log entry and diff
    Show {
        /// Commit or ref to show (defaults to HEAD)
        target: Option<String>,
    },
    /// Show the diff between a commit and the working directory
    Diff {
        /// Commit or ref to diff against (defaults to HEAD)
        target: Option<String>,
    },
    /// Move HEAD (and the branch it points at) to a commit
    Reset { target: String },
    /// Merge a commit or branch into the current branch
    Merge { target: String },
    /// Find the common ancestor of two commits
    MergeBase { first: String, second: String },
    /// List all references
    ShowRef,
}

fn open_repo() -> Result<Repository> {
    Repository::open(".").context("not a git repository (or any parent up to the root)")
}

pub fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Init { path } => init::run(path),
        Commands::HashObject { file, write } => hash_object::run(open_repo()?, file, write),
        Commands::CatFile {
            object,
            pretty,
            show_type,
        } => cat_file::run(open_repo()?, object, pretty, show_type),
        Commands::WriteTree => write_tree::run(open_repo()?),
        Commands::ReadTree { tree } => read_tree::run(open_repo()?, tree),
        Commands::Commit { message } => commit::run(open_repo()?, message),
        Commands::Log { start } => log::run(open_repo()?, start),
        Commands::Checkout { target } => checkout::run(open_repo()?, target),
        Commands::Tag { name, target } => tag::run(open_repo()?, name, target),
        Commands::Branch { name } => branch::run(open_repo()?, name),
        Commands::Status => status::run(open_repo()?),
        Commands::Show { target } => show::run(open_repo()?, target),
        Commands::Diff { target } => diff::run(open_repo()?, target),
        Commands::Reset { target } => reset::run(open_repo()?, target),
        Commands::Merge { target } => merge::run(open_repo()?, target),
        Commands::MergeBase { first, second } => merge_base::run(open_repo()?, first, second),
        Commands::ShowRef => show_ref::run(open_repo()?),
    }
}
