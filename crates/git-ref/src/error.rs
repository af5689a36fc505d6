/// Error types for reference operations.
#[derive(Debug, thiserror::Error)]
pub enum RefError {
    #[error("invalid ref name: {0}")]
    InvalidName(String),

    #[error("symbolic ref loop detected: {0}")]
    SymrefLoop(String),

    #[error("refusing to write an empty OID to {0}")]
    EmptyOid(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Hash(#[from] git_hash::HashError),
}
