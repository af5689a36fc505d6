use git_hash::ObjectId;
use git_ref::RefName;

use crate::{RepoError, Repository};

impl Repository {
    /// Resolve a user-supplied name to an object ID.
    ///
    /// `"HEAD"` resolves directly. Otherwise, probe in order: `name`,
    /// `refs/<name>`, `refs/heads/<name>`, `refs/tags/<name>`; the first
    /// probe with a non-null value wins. Failing that, a 40-character hex
    /// string is taken as a literal OID. Anything else is `UnknownRef`.
    pub fn get_oid(&self, name: &str) -> Result<ObjectId, RepoError> {
        if name == "HEAD" {
            let head = RefName::new("HEAD")?;
            return self
                .refs
                .get_ref(&head, true)?
                .as_oid()
                .ok_or_else(|| RepoError::UnknownRef(name.to_string()));
        }

        for candidate in [
            name.to_string(),
            format!("refs/{name}"),
            format!("refs/heads/{name}"),
            format!("refs/tags/{name}"),
        ] {
            let Ok(ref_name) = RefName::new(candidate) else {
                continue;
            };
            if let Some(oid) = self.refs.get_ref(&ref_name, true)?.as_oid() {
                return Ok(oid);
            }
        }

        if name.len() == 40 && name.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Ok(ObjectId::from_hex(name)?);
        }

        Err(RepoError::UnknownRef(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git_ref::RefValue;
    use std::fs;

    #[test]
    fn resolves_head_master_and_full_ref_to_the_same_oid() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        fs::write(dir.path().join("a.txt"), b"hi\n").unwrap();
        let oid = repo.commit("first").unwrap();

        assert_eq!(repo.get_oid("HEAD").unwrap(), oid);
        assert_eq!(repo.get_oid("master").unwrap(), oid);
        assert_eq!(repo.get_oid("refs/heads/master").unwrap(), oid);
        assert_eq!(repo.get_oid(&oid.to_hex()).unwrap(), oid);
    }

    #[test]
    fn resolves_tags() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        fs::write(dir.path().join("a.txt"), b"hi\n").unwrap();
        let oid = repo.commit("first").unwrap();

        let tag = RefName::new("refs/tags/v1").unwrap();
        repo.refs()
            .update_ref(&tag, &RefValue::Direct(oid), false)
            .unwrap();

        assert_eq!(repo.get_oid("v1").unwrap(), oid);
    }

    #[test]
    fn unknown_name_fails() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        assert!(matches!(
            repo.get_oid("does-not-exist-xyz").unwrap_err(),
            RepoError::UnknownRef(_)
        ));
    }
}
