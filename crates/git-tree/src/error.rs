/// Errors from tree-codec and working-directory operations.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("tree entry '{0}' is invalid: '.', '..', and path separators are not allowed")]
    InvalidEntryName(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Object(#[from] git_object::ObjectError),

    #[error(transparent)]
    Odb(#[from] git_odb::OdbError),
}
