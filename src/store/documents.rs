use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CmsError, Result};

/// How a document's content is presented, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Plain,
    Markdown,
}

impl ContentKind {
    pub fn for_filename(name: &str) -> Self {
        match Path::new(name).extension().and_then(|ext| ext.to_str()) {
            Some("md") => ContentKind::Markdown,
            _ => ContentKind::Plain,
        }
    }
}

/// Flat-directory document storage. Every operation hits the filesystem
/// directly; there is no cache and no locking, so concurrent writers race
/// (last writer wins).
#[derive(Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    // Filenames are reduced to their final path component so a request
    // cannot reach outside the document directory.
    fn resolve(&self, name: &str) -> PathBuf {
        let base = Path::new(name)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.root.join(base)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.resolve(name).exists()
    }

    /// Filenames in the document directory, in filesystem enumeration order.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    pub fn read(&self, name: &str) -> Result<(String, ContentKind)> {
        let path = self.resolve(name);
        if !path.exists() {
            return Err(CmsError::DocumentNotFound(name.to_string()));
        }
        let content = fs::read_to_string(&path)?;
        Ok((content, ContentKind::for_filename(name)))
    }

    /// Creates a document under the trimmed name, overwriting silently if it
    /// already exists. Returns the name the document was stored under.
    pub fn create(&self, name: &str, content: &str) -> Result<String> {
        let name = name.trim();
        if !valid_filename(name) {
            return Err(CmsError::InvalidFilename);
        }
        fs::write(self.resolve(name), content)?;
        Ok(name.to_string())
    }

    /// Replaces the document's full content.
    pub fn write(&self, name: &str, content: &str) -> Result<()> {
        fs::write(self.resolve(name), content)?;
        Ok(())
    }

    /// Removes the document; fails if it does not exist.
    pub fn delete(&self, name: &str) -> Result<()> {
        fs::remove_file(self.resolve(name))?;
        Ok(())
    }

    /// Copies the document byte-for-byte to `<stem>_copy.<ext>`, overwriting
    /// any existing file under that name. Returns the copy's name.
    pub fn duplicate(&self, name: &str) -> Result<String> {
        let copy_name = copy_name_for(name);
        fs::copy(self.resolve(name), self.resolve(&copy_name))?;
        Ok(copy_name)
    }
}

/// A filename is acceptable when it is non-empty after trimming and carries
/// a `.txt` or `.md` extension.
pub fn valid_filename(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && (name.ends_with(".txt") || name.ends_with(".md"))
}

fn copy_name_for(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}_copy.{ext}"),
        None => format!("{name}_copy"),
    }
}
