use std::path::PathBuf;

/// Errors from repository-level operations.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("not a git repository: {0}")]
    NotFound(PathBuf),

    #[error("repository already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("unknown ref: {0}")]
    UnknownRef(String),

    #[error(transparent)]
    Odb(#[from] git_odb::OdbError),

    #[error(transparent)]
    Ref(#[from] git_ref::RefError),

    #[error(transparent)]
    Object(#[from] git_object::ObjectError),

    #[error(transparent)]
    Tree(#[from] git_tree::TreeError),

    #[error(transparent)]
    RevWalk(#[from] git_revwalk::RevWalkError),

    #[error(transparent)]
    Diff(#[from] git_diff::DiffError),

    #[error(transparent)]
    Hash(#[from] git_hash::HashError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
