use sha1::{Digest, Sha1};

use crate::ObjectId;

/// Streaming SHA-1 computation.
///
/// Data can be fed incrementally with [`update`](Hasher::update) or through
/// the [`std::io::Write`] implementation, then finalized into an
/// [`ObjectId`].
pub struct Hasher {
    inner: Sha1,
}

impl Hasher {
    /// Start a new hasher.
    pub fn new() -> Self {
        Self { inner: Sha1::new() }
    }

    /// Feed data into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalize and return the resulting `ObjectId`.
    pub fn finalize(self) -> ObjectId {
        let result = self.inner.finalize();
        // SHA-1 always produces 20 bytes, so this cannot fail.
        ObjectId::from_bytes(&result).expect("sha1 digest is always 20 bytes")
    }

    /// Hash a byte slice in one call.
    pub fn digest(data: &[u8]) -> ObjectId {
        let mut h = Self::new();
        h.update(data);
        h.finalize()
    }

    /// Hash a framed git object: `"{type} {len}\0{content}"`.
    pub fn hash_object(obj_type: &str, data: &[u8]) -> ObjectId {
        let header = format!("{} {}\0", obj_type, data.len());
        let mut h = Self::new();
        h.update(header.as_bytes());
        h.update(data);
        h.finalize()
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
