//! The tree codec (C3) and working-directory manager (C4).
//!
//! `git-object::Tree` owns the wire format (parsing and serialization of
//! the `<mode> <type> <oid> <filename>` line format); this crate owns the
//! filesystem side of that: walking a directory to build a tree, flattening
//! a tree back into a path map, and materializing a tree onto disk.

mod error;
mod ignore;
mod read;
mod workdir;
mod write;

pub use error::TreeError;
pub use ignore::IgnoreList;
pub use read::{get_tree, iterate_tree, Entry};
pub use workdir::{empty_current_directory, get_working_directory, read_tree};
pub use write::write_tree;
