use git_hash::ObjectId;

/// Errors from object store operations.
#[derive(Debug, thiserror::Error)]
pub enum OdbError {
    #[error("object not found: {0}")]
    NotFound(ObjectId),

    #[error("malformed object {oid}: {reason}")]
    Malformed { oid: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Object(#[from] git_object::ObjectError),

    #[error(transparent)]
    Hash(#[from] git_hash::HashError),
}
