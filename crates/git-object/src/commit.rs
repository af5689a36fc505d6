use bstr::{BStr, BString, ByteSlice};
use git_hash::ObjectId;

use crate::ObjectError;

/// A commit object.
///
/// Deliberately carries none of real git's authorship metadata — no
/// author, committer, timestamp, or signature. A commit is just a tree
/// snapshot, its parent chain, and a free-text message:
///
/// ```text
/// tree <oid>
/// commit <parent_oid>
/// commit <parent_oid>
///
/// <message>
/// ```
///
/// The `commit` line (not `parent`, unlike real git) names a parent;
/// there are zero for a root commit, one for an ordinary commit, two or
/// more for a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub tree: ObjectId,
    pub parents: Vec<ObjectId>,
    pub message: BString,
}

/// Drop stray NUL bytes from a header key or value. A defensive measure
/// against legacy records that may carry an embedded `\0`; without it a
/// NUL-bearing `tree`/`commit` value would fail hex-parsing instead of
/// being tolerated.
fn strip_nulls(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().copied().filter(|&b| b != 0).collect()
}

impl Commit {
    /// Parse commit content from raw bytes (no object header).
    pub fn parse(content: &[u8]) -> Result<Self, ObjectError> {
        let mut tree: Option<ObjectId> = None;
        let mut parents = Vec::new();

        let mut pos = 0;
        loop {
            if pos >= content.len() {
                break;
            }
            if content[pos] == b'\n' {
                pos += 1;
                break;
            }

            let line_end = content[pos..]
                .iter()
                .position(|&b| b == b'\n')
                .map(|p| p + pos)
                .unwrap_or(content.len());
            let line = &content[pos..line_end];

            let space_pos = line.iter().position(|&b| b == b' ').ok_or_else(|| {
                ObjectError::InvalidHeader("malformed commit header line".into())
            })?;
            let key = strip_nulls(&line[..space_pos]);
            let value = strip_nulls(&line[space_pos + 1..]);
            let hex = std::str::from_utf8(&value)
                .map_err(|_| ObjectError::InvalidHeader("non-UTF8 oid in commit".into()))?;

            match key.as_slice() {
                b"tree" => tree = Some(ObjectId::from_hex(hex)?),
                b"commit" => parents.push(ObjectId::from_hex(hex)?),
                other => {
                    return Err(ObjectError::InvalidHeader(format!(
                        "unknown commit header: {}",
                        String::from_utf8_lossy(other)
                    )));
                }
            }

            pos = line_end + 1;
        }

        let tree = tree.ok_or(ObjectError::MissingCommitField { field: "tree" })?;
        let message = BString::from(&content[pos..]);

        Ok(Self {
            tree,
            parents,
            message,
        })
    }

    /// Serialize commit content to bytes (no object header).
    pub fn serialize_content(&self) -> Vec<u8> {
        let mut out = Vec::new();

        out.extend_from_slice(b"tree ");
        out.extend_from_slice(self.tree.to_hex().as_bytes());
        out.push(b'\n');

        for parent in &self.parents {
            out.extend_from_slice(b"commit ");
            out.extend_from_slice(parent.to_hex().as_bytes());
            out.push(b'\n');
        }

        out.push(b'\n');
        out.extend_from_slice(&self.message);

        out
    }

    /// Get the first parent (or `None` for root commits). First-parent is
    /// the mainline traversal chain the walker follows depth-first.
    pub fn first_parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// The summary line (first line of the message).
    pub fn summary(&self) -> &BStr {
        let msg: &[u8] = self.message.as_ref();
        match msg.find_byte(b'\n') {
            Some(pos) => BStr::new(&msg[..pos]),
            None => BStr::new(msg),
        }
    }
}
