use std::fs;
use std::path::Path;

use git_hash::{Hasher, ObjectId};
use git_object::{header, ObjectType};

use crate::{ObjectStore, OdbError};

impl ObjectStore {
    /// Write raw content with a known type. Returns the resulting OID.
    ///
    /// A no-op if the object already exists — content-addressing makes this
    /// safe even under a race with another writer, since both would produce
    /// identical bytes.
    pub fn put(&self, obj_type: ObjectType, content: &[u8]) -> Result<ObjectId, OdbError> {
        let hdr = header::write_header(obj_type, content.len());

        let oid = {
            let mut hasher = Hasher::new();
            hasher.update(&hdr);
            hasher.update(content);
            hasher.finalize()
        };

        if self.contains(&oid) {
            return Ok(oid);
        }

        let final_path = self.object_path(&oid);
        if let Some(parent) = final_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = write_to_temp(&self.objects_dir, &hdr, content)?;
        finalize_object(&tmp_path, &final_path)?;

        Ok(oid)
    }
}

/// Write header + content, uncompressed, into a temp file under `objects_dir`.
fn write_to_temp(
    objects_dir: &Path,
    hdr: &[u8],
    content: &[u8],
) -> Result<std::path::PathBuf, OdbError> {
    let tmp_path = objects_dir.join(format!(
        "tmp_obj_{}",
        std::process::id()
            ^ std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .subsec_nanos()
    ));

    let mut file = fs::File::create(&tmp_path)?;
    use std::io::Write;
    file.write_all(hdr)?;
    file.write_all(content)?;

    Ok(tmp_path)
}

/// Atomically move a temp file to its final destination.
///
/// If the destination already exists (another writer won the race), the
/// temp file is discarded and the write is treated as successful —
/// content-addressing guarantees they'd be byte-identical anyway.
fn finalize_object(tmp: &Path, final_path: &Path) -> Result<(), OdbError> {
    match fs::rename(tmp, final_path) {
        Ok(()) => Ok(()),
        Err(_) if final_path.exists() => {
            let _ = fs::remove_file(tmp);
            Ok(())
        }
        Err(e) => {
            let _ = fs::remove_file(tmp);
            Err(OdbError::Io(e))
        }
    }
}
