use std::fs::{create_dir_all, File};
use std::io::{BufReader, ErrorKind, Write};
use std::path::PathBuf;

use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::errors::Result;

pub const VAULT_FILE: &str = "spent.json";

/// Key-value persistence. Each key holds one JSON value, overwritten as a whole.
pub trait Vault {
    fn read_value(&self, key: &str) -> Result<Option<Value>>;
    fn write_value(&self, key: &str, value: Value) -> Result<()>;
}

pub trait VaultKey {
    const KEY: &'static str;
}

/// Values that can be read back from a vault. Reading never fails: missing,
/// unreadable or malformed content falls back to the default value.
pub trait VaultReadable: VaultKey + Default + Sized {
    fn from_vault_value(value: Value) -> Self;

    fn from_vault<V: Vault>(vault: &V) -> Self {
        match vault.read_value(Self::KEY) {
            Ok(Some(value)) => Self::from_vault_value(value),
            Ok(None) => {
                debug!(key = Self::KEY, "No value stored yet");
                Self::default()
            }
            Err(error) => {
                warn!(key = Self::KEY, %error, "Could not read the vault, using an empty value");
                Self::default()
            }
        }
    }
}

pub trait VaultWritable: VaultKey {
    fn to_vault_value(&self) -> Result<Value>;

    fn to_vault<V: Vault>(&self, vault: &V) -> Result<()> {
        vault.write_value(Self::KEY, self.to_vault_value()?)
    }
}

/// A vault stored as a single JSON document inside a directory.
pub struct FileVault {
    pub path: PathBuf,
}

impl FileVault {
    pub fn file_path(&self) -> PathBuf {
        self.path.join(VAULT_FILE)
    }

    fn read_document(&self) -> Result<Map<String, Value>> {
        let path = self.file_path();
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Vault file does not exist yet");
                return Ok(Map::new());
            }
            Err(error) => return Err(error.into()),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(Value::Object(document)) => Ok(document),
            Err(error) if error.is_io() => Err(error.into()),
            _ => {
                warn!(path = %path.display(), "Vault file is not a JSON object, ignoring its content");
                Ok(Map::new())
            }
        }
    }
}

impl Vault for FileVault {
    fn read_value(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.read_document()?.remove(key))
    }

    fn write_value(&self, key: &str, value: Value) -> Result<()> {
        let mut document = self.read_document()?;
        document.insert(key.to_string(), value);

        create_dir_all(&self.path)?;
        // Written next to the target then renamed over it, readers never see a partial file
        let mut file = NamedTempFile::new_in(&self.path)?;
        serde_json::to_writer_pretty(&mut file, &Value::Object(document))?;
        file.flush()?;
        file.persist(self.file_path())?;

        debug!(key, path = %self.file_path().display(), "Saved vault value");
        Ok(())
    }
}

#[cfg(test)]
pub use memory::MemoryVault;

#[cfg(test)]
mod memory {
    use std::cell::RefCell;

    use serde_json::{Map, Value};

    use super::Vault;
    use crate::errors::Result;

    /// Vault kept in memory, stands in for the file vault in tests.
    #[derive(Default)]
    pub struct MemoryVault {
        values: RefCell<Map<String, Value>>,
    }

    impl Vault for MemoryVault {
        fn read_value(&self, key: &str) -> Result<Option<Value>> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn write_value(&self, key: &str, value: Value) -> Result<()> {
            self.values.borrow_mut().insert(key.to_string(), value);
            Ok(())
        }
    }
}
