use std::fs;
use std::path::{Path, PathBuf};

use git_hash::ObjectId;

use crate::error::RefError;
use crate::name::RefName;
use crate::RefValue;

/// Bound on symbolic ref chain length, guarding against cycles.
const MAX_SYMREF_DEPTH: usize = 10;

/// A file-backed reference store rooted at a repository's ref directory
/// (typically `.egit/`).
pub struct RefStore {
    root: PathBuf,
}

impl RefStore {
    /// Open a store rooted at `root`. Does not create `root` — callers that
    /// need it to exist should create it during repository initialization.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The ref root this store was opened on.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ref_path(&self, name: &RefName) -> PathBuf {
        self.root.join(name.as_str())
    }

    fn read_raw(&self, name: &RefName) -> Result<Option<String>, RefError> {
        let path = self.ref_path(name);
        match fs::read(&path) {
            Ok(bytes) => {
                let text = String::from_utf8(bytes)
                    .map_err(|_| RefError::Parse(format!("invalid UTF-8 in ref {name}")))?;
                Ok(Some(text.trim().to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn parse_raw(&self, raw: Option<String>) -> Result<RefValue, RefError> {
        let Some(raw) = raw else {
            return Ok(RefValue::Absent);
        };
        if let Some(target) = raw.strip_prefix("ref:") {
            Ok(RefValue::Symbolic(RefName::new(target.trim())?))
        } else {
            Ok(RefValue::Direct(ObjectId::from_hex(&raw)?))
        }
    }

    /// Resolve `name` to its value. If `deref` and the value is symbolic,
    /// follow the chain; the terminal value is either `Direct` or `Absent`
    /// (a chain that ends on a missing file resolves to `Absent` rather
    /// than an error).
    pub fn get_ref(&self, name: &RefName, deref: bool) -> Result<RefValue, RefError> {
        self.get_ref_inner(name, deref, 0)
    }

    fn get_ref_inner(&self, name: &RefName, deref: bool, depth: usize) -> Result<RefValue, RefError> {
        if depth > MAX_SYMREF_DEPTH {
            return Err(RefError::SymrefLoop(name.to_string()));
        }
        let value = self.parse_raw(self.read_raw(name)?)?;
        match value {
            RefValue::Symbolic(target) if deref => self.get_ref_inner(&target, true, depth + 1),
            other => Ok(other),
        }
    }

    /// Follow a chain of symbolic refs starting at `name`, stopping at the
    /// first name that is not itself a symbolic ref file — whether that
    /// name holds a direct OID or doesn't exist at all. This is the name a
    /// deref'd write targets, as distinct from [`Self::get_ref`], which
    /// resolves to a *value*.
    fn resolve_write_target(&self, name: &RefName) -> Result<RefName, RefError> {
        let mut current = name.clone();
        for _ in 0..=MAX_SYMREF_DEPTH {
            match self.read_raw(&current)? {
                Some(text) if text.starts_with("ref:") => {
                    current = RefName::new(text["ref:".len()..].trim())?;
                }
                _ => return Ok(current),
            }
        }
        Err(RefError::SymrefLoop(name.to_string()))
    }

    /// Write `value` at `name`. If `deref` and the existing ref at `name` is
    /// symbolic, follow the chain and write the final target instead of
    /// `name` itself. Parent directories are created on demand.
    pub fn update_ref(&self, name: &RefName, value: &RefValue, deref: bool) -> Result<(), RefError> {
        let target_name = if deref {
            self.resolve_write_target(name)?
        } else {
            name.clone()
        };

        let line = match value {
            RefValue::Direct(oid) => {
                if oid.is_null() {
                    return Err(RefError::EmptyOid(target_name.to_string()));
                }
                format!("{}\n", oid.to_hex())
            }
            RefValue::Symbolic(target) => format!("ref: {target}\n"),
            RefValue::Absent => return Err(RefError::EmptyOid(target_name.to_string())),
        };

        let path = self.ref_path(&target_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, line)?;
        Ok(())
    }

    /// Unlink the file at `name` (or, if `deref`, its terminal deref target).
    /// Deleting an already-absent ref is not an error.
    pub fn delete_ref(&self, name: &RefName, deref: bool) -> Result<(), RefError> {
        let target_name = if deref {
            self.resolve_write_target(name)?
        } else {
            name.clone()
        };
        let path = self.ref_path(&target_name);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Yield `(refname, value)` for `HEAD`, `MERGE_HEAD` (when present), and
    /// every file under `refs/`, filtered to names starting with `prefix`.
    /// The yielded refname is relative to the ref root and forward-slash
    /// separated. Order is stable within one call but otherwise unspecified.
    pub fn iter_refs(&self, prefix: &str, deref: bool) -> Result<Vec<(RefName, RefValue)>, RefError> {
        let mut candidates = vec![RefName::new("HEAD")?];

        let merge_head = RefName::new("MERGE_HEAD")?;
        if !self.get_ref(&merge_head, true)?.is_absent() {
            candidates.push(merge_head);
        }

        let refs_root = self.root.join("refs");
        if refs_root.is_dir() {
            self.collect_ref_files(&refs_root, &mut candidates)?;
        }

        let mut out = Vec::with_capacity(candidates.len());
        for name in candidates {
            if !name.as_str().starts_with(prefix) {
                continue;
            }
            let value = self.get_ref(&name, deref)?;
            out.push((name, value));
        }
        Ok(out)
    }

    fn collect_ref_files(&self, dir: &Path, out: &mut Vec<RefName>) -> Result<(), RefError> {
        let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let path = entry.path();
            if path.is_dir() {
                self.collect_ref_files(&path, out)?;
            } else {
                let rel = path
                    .strip_prefix(&self.root)
                    .map_err(|_| RefError::Parse("ref path outside ref root".into()))?;
                let rel_str = rel
                    .to_str()
                    .ok_or_else(|| RefError::Parse("non-UTF-8 ref path".into()))?;
                out.push(RefName::new(rel_str.replace(std::path::MAIN_SEPARATOR, "/"))?);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(hex: &str) -> ObjectId {
        ObjectId::from_hex(hex).unwrap()
    }

    #[test]
    fn get_missing_ref_is_absent_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = RefStore::new(dir.path());
        let name = RefName::new("refs/heads/main").unwrap();
        assert_eq!(store.get_ref(&name, true).unwrap(), RefValue::Absent);
    }

    #[test]
    fn update_then_get_direct_ref() {
        let dir = tempfile::tempdir().unwrap();
        let store = RefStore::new(dir.path());
        let name = RefName::new("refs/heads/main").unwrap();
        let target = oid("da39a3ee5e6b4b0d3255bfef95601890afd80709");

        store
            .update_ref(&name, &RefValue::Direct(target), true)
            .unwrap();

        assert_eq!(store.get_ref(&name, true).unwrap(), RefValue::Direct(target));
    }

    #[test]
    fn writing_null_oid_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = RefStore::new(dir.path());
        let name = RefName::new("refs/heads/main").unwrap();

        let err = store
            .update_ref(&name, &RefValue::Direct(ObjectId::NULL), true)
            .unwrap_err();
        assert!(matches!(err, RefError::EmptyOid(_)));
    }

    #[test]
    fn symbolic_ref_resolves_through_deref() {
        let dir = tempfile::tempdir().unwrap();
        let store = RefStore::new(dir.path());

        let main = RefName::new("refs/heads/main").unwrap();
        let target = oid("da39a3ee5e6b4b0d3255bfef95601890afd80709");
        store
            .update_ref(&main, &RefValue::Direct(target), false)
            .unwrap();

        let head = RefName::new("HEAD").unwrap();
        store
            .update_ref(&head, &RefValue::Symbolic(main.clone()), false)
            .unwrap();

        assert_eq!(store.get_ref(&head, true).unwrap(), RefValue::Direct(target));
        assert_eq!(
            store.get_ref(&head, false).unwrap(),
            RefValue::Symbolic(main)
        );
    }

    #[test]
    fn deref_through_chain_to_missing_target_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = RefStore::new(dir.path());

        let head = RefName::new("HEAD").unwrap();
        let main = RefName::new("refs/heads/main").unwrap();
        store
            .update_ref(&head, &RefValue::Symbolic(main), false)
            .unwrap();

        assert_eq!(store.get_ref(&head, true).unwrap(), RefValue::Absent);
    }

    #[test]
    fn update_with_deref_writes_through_symbolic_head() {
        let dir = tempfile::tempdir().unwrap();
        let store = RefStore::new(dir.path());

        let head = RefName::new("HEAD").unwrap();
        let main = RefName::new("refs/heads/main").unwrap();
        store
            .update_ref(&head, &RefValue::Symbolic(main.clone()), false)
            .unwrap();

        let target = oid("da39a3ee5e6b4b0d3255bfef95601890afd80709");
        store
            .update_ref(&head, &RefValue::Direct(target), true)
            .unwrap();

        // HEAD itself is still symbolic...
        assert_eq!(
            store.get_ref(&head, false).unwrap(),
            RefValue::Symbolic(main.clone())
        );
        // ...but the branch it points to now carries the new OID.
        assert_eq!(store.get_ref(&main, false).unwrap(), RefValue::Direct(target));
    }

    #[test]
    fn symref_loop_is_detected() {
        let dir = tempfile::tempdir().unwrap();
        let store = RefStore::new(dir.path());

        let a = RefName::new("refs/heads/a").unwrap();
        let b = RefName::new("refs/heads/b").unwrap();
        store
            .update_ref(&a, &RefValue::Symbolic(b.clone()), false)
            .unwrap();
        store
            .update_ref(&b, &RefValue::Symbolic(a.clone()), false)
            .unwrap();

        let err = store.get_ref(&a, true).unwrap_err();
        assert!(matches!(err, RefError::SymrefLoop(_)));
    }

    #[test]
    fn delete_ref_removes_direct_ref() {
        let dir = tempfile::tempdir().unwrap();
        let store = RefStore::new(dir.path());
        let name = RefName::new("refs/heads/main").unwrap();
        let target = oid("da39a3ee5e6b4b0d3255bfef95601890afd80709");

        store
            .update_ref(&name, &RefValue::Direct(target), false)
            .unwrap();
        store.delete_ref(&name, false).unwrap();

        assert_eq!(store.get_ref(&name, false).unwrap(), RefValue::Absent);
    }

    #[test]
    fn delete_absent_ref_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = RefStore::new(dir.path());
        let name = RefName::new("refs/heads/nonexistent").unwrap();
        store.delete_ref(&name, false).unwrap();
    }

    #[test]
    fn iter_refs_yields_head_and_branches() {
        let dir = tempfile::tempdir().unwrap();
        let store = RefStore::new(dir.path());
        let target = oid("da39a3ee5e6b4b0d3255bfef95601890afd80709");

        store
            .update_ref(&RefName::new("refs/heads/main").unwrap(), &RefValue::Direct(target), false)
            .unwrap();
        store
            .update_ref(&RefName::new("refs/tags/v1.0").unwrap(), &RefValue::Direct(target), false)
            .unwrap();

        let refs = store.iter_refs("", true).unwrap();
        let names: Vec<String> = refs.iter().map(|(n, _)| n.to_string()).collect();

        assert!(names.contains(&"HEAD".to_string()));
        assert!(names.contains(&"refs/heads/main".to_string()));
        assert!(names.contains(&"refs/tags/v1.0".to_string()));
        // MERGE_HEAD wasn't written, so it's absent from the output entirely.
        assert!(!names.contains(&"MERGE_HEAD".to_string()));
    }

    #[test]
    fn iter_refs_includes_merge_head_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let store = RefStore::new(dir.path());
        let target = oid("da39a3ee5e6b4b0d3255bfef95601890afd80709");

        store
            .update_ref(&RefName::new("MERGE_HEAD").unwrap(), &RefValue::Direct(target), false)
            .unwrap();

        let refs = store.iter_refs("", true).unwrap();
        let names: Vec<String> = refs.iter().map(|(n, _)| n.to_string()).collect();
        assert!(names.contains(&"MERGE_HEAD".to_string()));
    }

    #[test]
    fn iter_refs_respects_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let store = RefStore::new(dir.path());
        let target = oid("da39a3ee5e6b4b0d3255bfef95601890afd80709");

        store
            .update_ref(&RefName::new("refs/heads/main").unwrap(), &RefValue::Direct(target), false)
            .unwrap();
        store
            .update_ref(&RefName::new("refs/tags/v1.0").unwrap(), &RefValue::Direct(target), false)
            .unwrap();

        let refs = store.iter_refs("refs/heads/", true).unwrap();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].0.to_string(), "refs/heads/main");
    }
}
