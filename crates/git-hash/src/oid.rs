use std::fmt;
use std::str::FromStr;

use crate::hex::{hex_decode, hex_to_string};
use crate::HashError;

/// Length in bytes of a SHA-1 digest.
pub const OID_BYTES: usize = 20;
/// Length in hex characters of a SHA-1 digest's string form.
pub const OID_HEX_LEN: usize = OID_BYTES * 2;

/// A content-address: the SHA-1 digest of an object's framed bytes.
///
/// Every object in the store — blob, tree, or commit — is named by one of
/// these. The object's type is never encoded in the `ObjectId` itself; it
/// lives in the object's header.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; OID_BYTES]);

impl ObjectId {
    /// The null OID (all zeros). Used to mark "no parent" / "no previous tree".
    pub const NULL: Self = Self([0u8; OID_BYTES]);

    /// Build an `ObjectId` from exactly `OID_BYTES` raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HashError> {
        if bytes.len() != OID_BYTES {
            return Err(HashError::InvalidHashLength {
                expected: OID_BYTES,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; OID_BYTES];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Parse an `ObjectId` from its 40-character hex representation.
    pub fn from_hex(hex: &str) -> Result<Self, HashError> {
        if hex.len() != OID_HEX_LEN {
            return Err(HashError::InvalidHexLength {
                expected: OID_HEX_LEN,
                actual: hex.len(),
            });
        }
        let mut bytes = [0u8; OID_BYTES];
        hex_decode(hex, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Get the raw 20 bytes of the digest.
    pub fn as_bytes(&self) -> &[u8; OID_BYTES] {
        &self.0
    }

    /// Check if this is the null OID.
    pub fn is_null(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Get the 40-character lowercase hex representation.
    pub fn to_hex(&self) -> String {
        hex_to_string(&self.0)
    }

    /// The two-level fan-out path component used under `objects/`:
    /// `"xx/xxxx...xx"` — first hex byte as the directory, the rest as the
    /// filename.
    pub fn loose_path(&self) -> String {
        let hex = self.to_hex();
        format!("{}/{}", &hex[..2], &hex[2..])
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", &self.to_hex()[..8])
    }
}

impl FromStr for ObjectId {
    type Err = HashError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
