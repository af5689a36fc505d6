use git_hash::ObjectId;

/// Errors from history traversal.
#[derive(Debug, thiserror::Error)]
pub enum RevWalkError {
    #[error("object is not a commit: {0}")]
    NotACommit(ObjectId),

    #[error(transparent)]
    Odb(#[from] git_odb::OdbError),

    #[error(transparent)]
    Object(#[from] git_object::ObjectError),
}
