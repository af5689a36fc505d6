/// Errors from the diff/merge engine.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Odb(#[from] git_odb::OdbError),

    #[error(transparent)]
    Tree(#[from] git_tree::TreeError),

    #[error("external collaborator '{program}' exited with status {status}")]
    CollaboratorFailed { program: String, status: i32 },

    #[error("external collaborator '{program}' is not available: {source}")]
    CollaboratorUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
