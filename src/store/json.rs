use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::domain::Contact;
use crate::errors::Result;
use crate::store::ContactStore;

/// JSON-file-backed store. The backing file is created on first load if it
/// does not exist; a zero-length file reads as an empty collection.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        create_file_parent(&path)?;

        Ok(JsonStore { path })
    }
}

impl ContactStore for JsonStore {
    fn load(&self) -> Result<Vec<Contact>> {
        // Open the file if it already exists, or create it
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .truncate(false)
            .create(true)
            .open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json errors on empty input
        if data.is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, contacts: &[Contact]) -> Result<()> {
        let data = serde_json::to_string(contacts)?;

        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(&self.path)?;

        file.write_all(data.as_bytes())?;
        Ok(())
    }
}

pub fn create_file_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_loads_as_empty_collection() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = JsonStore::new(dir.path().join("contacts.json"))?;

        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn save_then_load_round_trips() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = JsonStore::new(dir.path().join("contacts.json"))?;

        let contacts = vec![
            Contact::new("Uche", "ucheuche@gmail.com", "081234567890"),
            Contact::new("Mom", "", "087654321098"),
        ];
        store.save(&contacts)?;

        assert_eq!(store.load()?, contacts);
        Ok(())
    }

    #[test]
    fn missing_parent_directories_are_created() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("data").join("nested").join("contacts.json");

        let store = JsonStore::new(nested)?;
        store.save(&[Contact::new("Uche", "", "081234567890")])?;

        assert_eq!(store.load()?.len(), 1);
        Ok(())
    }

    #[test]
    fn malformed_file_is_a_storage_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("contacts.json");
        fs::write(&path, "not json at all")?;

        let store = JsonStore::new(&path)?;
        assert!(matches!(
            store.load(),
            Err(crate::errors::AppError::Json(_))
        ));
        Ok(())
    }
}
