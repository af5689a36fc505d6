use std::fs;

use git_hash::ObjectId;
use git_object::{header, ObjectType};

use crate::{ObjectStore, OdbError};

impl ObjectStore {
    /// Check whether an object exists.
    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.object_path(oid).is_file()
    }

    /// Read an object's raw framed bytes: `"<type> <size>\0<payload>"`.
    ///
    /// Returns [`OdbError::NotFound`] if no such object exists.
    pub fn get(&self, oid: &ObjectId) -> Result<Vec<u8>, OdbError> {
        let path = self.object_path(oid);
        match fs::read(&path) {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(OdbError::NotFound(*oid))
            }
            Err(e) => Err(OdbError::Io(e)),
        }
    }

    /// Split raw framed bytes into `(type, declared_size, payload)`.
    ///
    /// The declared size is advisory only — the payload slice's actual
    /// length is what callers should trust.
    pub fn split(data: &[u8]) -> Result<(ObjectType, usize, &[u8]), OdbError> {
        let (obj_type, size, header_len) =
            header::parse_header(data).map_err(|e| OdbError::Malformed {
                oid: String::new(),
                reason: e.to_string(),
            })?;
        Ok((obj_type, size, &data[header_len..]))
    }

    /// Read an object's header (type + declared size) without caring about
    /// the payload.
    pub fn header(&self, oid: &ObjectId) -> Result<(ObjectType, usize), OdbError> {
        let data = self.get(oid)?;
        let (obj_type, size, _) = Self::split(&data).map_err(|_| OdbError::Malformed {
            oid: oid.to_hex(),
            reason: "invalid header".into(),
        })?;
        Ok((obj_type, size))
    }

    /// Read an object's payload (type-specific content, no header).
    pub fn content(&self, oid: &ObjectId) -> Result<Vec<u8>, OdbError> {
        let data = self.get(oid)?;
        let (_, _, payload) = Self::split(&data).map_err(|_| OdbError::Malformed {
            oid: oid.to_hex(),
            reason: "invalid header".into(),
        })?;
        Ok(payload.to_vec())
    }
}
