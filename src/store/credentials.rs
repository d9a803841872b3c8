use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// User credentials persisted as a flat YAML mapping of username to bcrypt
/// hash. Every operation re-reads the file, so the store always reflects
/// what is on disk.
#[derive(Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads the username -> hash mapping. An empty file is an empty
    /// mapping; a malformed file is a fatal error.
    pub fn load(&self) -> Result<BTreeMap<String, String>> {
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_yaml::from_str(&raw)?)
    }

    pub fn verify(&self, username: &str, password: &str) -> Result<bool> {
        let users = self.load()?;
        match users.get(username) {
            Some(hash) => Ok(bcrypt::verify(password, hash)?),
            None => Ok(false),
        }
    }

    /// Hashes the password and rewrites the credential file with the new
    /// entry included. The rewrite replaces the whole file and is not
    /// atomic; concurrent signups can drop one party's entry.
    pub fn add(&self, username: &str, password: &str) -> Result<()> {
        let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
        let mut users = self.load()?;
        users.insert(username.to_string(), hash);
        fs::write(&self.path, serde_yaml::to_string(&users)?)?;
        Ok(())
    }
}
