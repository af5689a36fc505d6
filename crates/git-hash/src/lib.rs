//! Object identity and hashing for egit.
//!
//! This crate provides the `ObjectId` type (a SHA-1 digest), hex
//! encoding/decoding, and a streaming `Hasher`. The object store, object
//! codec, and everything above them build on top of this crate.

mod error;
pub mod hasher;
pub mod hex;
mod oid;

pub use error::HashError;
pub use hasher::Hasher;
pub use oid::{ObjectId, OID_BYTES, OID_HEX_LEN};
