use bstr::{BStr, BString, ByteSlice};
use git_hash::ObjectId;

use crate::{ObjectError, ObjectType};

/// File mode for tree entries. Only the two modes the working-directory
/// manager actually distinguishes are tracked; anything else preserved
/// verbatim so round-tripping never loses information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileMode {
    /// Regular file (100644)
    Regular,
    /// Executable file (100755)
    Executable,
    /// Subdirectory (040000)
    Tree,
    /// Unknown mode (preserved for round-trip)
    Unknown(u32),
}

impl FileMode {
    /// Parse from octal ASCII bytes (e.g., `b"100644"`).
    pub fn from_bytes(s: &[u8]) -> Result<Self, ObjectError> {
        let raw = parse_octal(s)
            .ok_or_else(|| ObjectError::InvalidFileMode(String::from_utf8_lossy(s).into()))?;
        Ok(Self::from_raw(raw))
    }

    /// Create from the raw numeric value.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0o100644 => Self::Regular,
            0o100755 => Self::Executable,
            0o40000 => Self::Tree,
            other => Self::Unknown(other),
        }
    }

    /// Serialize to octal ASCII bytes, matching the spec's literal
    /// per-mode spellings: `100644`/`100755` for blobs, and `040000`
    /// (zero-padded) for trees -- `{:o}` of the raw value would otherwise
    /// drop the leading zero `0o40000` carries.
    pub fn as_bytes(&self) -> BString {
        match self {
            Self::Regular => BString::from("100644"),
            Self::Executable => BString::from("100755"),
            Self::Tree => BString::from("040000"),
            Self::Unknown(v) => BString::from(format!("{v:o}")),
        }
    }

    /// Get the raw numeric value.
    pub fn raw(&self) -> u32 {
        match self {
            Self::Regular => 0o100644,
            Self::Executable => 0o100755,
            Self::Tree => 0o40000,
            Self::Unknown(v) => *v,
        }
    }

    /// Is this a tree (directory) entry?
    pub fn is_tree(&self) -> bool {
        matches!(self, Self::Tree)
    }

    /// Is this a blob (file) entry?
    pub fn is_blob(&self) -> bool {
        matches!(self, Self::Regular | Self::Executable)
    }

    /// The object type this mode implies.
    pub fn object_type(&self) -> ObjectType {
        if self.is_tree() {
            ObjectType::Tree
        } else {
            ObjectType::Blob
        }
    }
}

fn parse_octal(s: &[u8]) -> Option<u32> {
    if s.is_empty() {
        return None;
    }
    let mut val: u32 = 0;
    for &b in s {
        if !(b'0'..=b'7').contains(&b) {
            return None;
        }
        val = val.checked_mul(8)?.checked_add(u32::from(b - b'0'))?;
    }
    Some(val)
}

/// A single entry in a tree object: `<mode> <type> <oid> <filename>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub mode: FileMode,
    pub obj_type: ObjectType,
    pub oid: ObjectId,
    pub name: BString,
}

impl TreeEntry {
    pub fn blob(name: impl Into<BString>, oid: ObjectId, executable: bool) -> Self {
        Self {
            mode: if executable {
                FileMode::Executable
            } else {
                FileMode::Regular
            },
            obj_type: ObjectType::Blob,
            oid,
            name: name.into(),
        }
    }

    pub fn tree(name: impl Into<BString>, oid: ObjectId) -> Self {
        Self {
            mode: FileMode::Tree,
            obj_type: ObjectType::Tree,
            oid,
            name: name.into(),
        }
    }
}

/// A tree object — an (ASCII, line-oriented) directory listing.
///
/// Each line is `<mode> <type> <oid> <filename>\n`, with the OID written
/// as 40 lowercase hex characters rather than 20 raw bytes. Entries are
/// always written sorted by filename, so `write_tree` is deterministic
/// regardless of the directory-scan order the filesystem happens to hand
/// back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tree {
    pub entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse tree content from its ASCII line format.
    pub fn parse(content: &[u8]) -> Result<Self, ObjectError> {
        let mut entries = Vec::new();
        let text = content.to_str().map_err(|_| ObjectError::InvalidTreeEntry {
            offset: 0,
            reason: "non-UTF8 tree content".into(),
        })?;

        let mut offset = 0;
        for line in text.lines() {
            let mut parts = line.splitn(4, ' ');
            let mode_s = parts.next().ok_or_else(|| ObjectError::InvalidTreeEntry {
                offset,
                reason: "missing mode".into(),
            })?;
            let type_s = parts.next().ok_or_else(|| ObjectError::InvalidTreeEntry {
                offset,
                reason: "missing type".into(),
            })?;
            let oid_s = parts.next().ok_or_else(|| ObjectError::InvalidTreeEntry {
                offset,
                reason: "missing oid".into(),
            })?;
            let name_s = parts.next().ok_or_else(|| ObjectError::InvalidTreeEntry {
                offset,
                reason: "missing filename".into(),
            })?;

            let mode = FileMode::from_bytes(mode_s.as_bytes())
                .map_err(|_| ObjectError::InvalidTreeEntry {
                    offset,
                    reason: "invalid mode".into(),
                })?;
            let obj_type = ObjectType::from_bytes(type_s.as_bytes())
                .map_err(|_| ObjectError::InvalidTreeEntry {
                    offset,
                    reason: "invalid object type".into(),
                })?;
            let oid = ObjectId::from_hex(oid_s)?;

            entries.push(TreeEntry {
                mode,
                obj_type,
                oid,
                name: BString::from(name_s),
            });
            offset += line.len() + 1;
        }

        Ok(Self { entries })
    }

    /// Serialize tree content to the ASCII line format, sorted by filename.
    pub fn serialize_content(&self) -> Vec<u8> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        let mut out = Vec::new();
        for entry in &sorted {
            out.extend_from_slice(&entry.mode.as_bytes());
            out.push(b' ');
            out.extend_from_slice(entry.obj_type.as_bytes());
            out.push(b' ');
            out.extend_from_slice(entry.oid.to_hex().as_bytes());
            out.push(b' ');
            out.extend_from_slice(&entry.name);
            out.push(b'\n');
        }
        out
    }

    /// Sort entries by filename (the order they're serialized in).
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Lookup an entry by name.
    pub fn find(&self, name: &BStr) -> Option<&TreeEntry> {
        self.entries.iter().find(|e| e.name.as_bstr() == name)
    }

    /// Iterate entries.
    pub fn iter(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
