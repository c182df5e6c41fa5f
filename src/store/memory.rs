use std::sync::Mutex;

use crate::domain::Contact;
use crate::errors::{AppError, Result};
use crate::store::ContactStore;

/// In-memory store, used as a test fake for the file-backed store. Honors
/// the same contract: `save` replaces the whole collection, `load` returns a
/// snapshot of it.
#[derive(Default)]
pub struct MemStore {
    data: Mutex<Vec<Contact>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        MemStore {
            data: Mutex::new(contacts),
        }
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<Vec<Contact>> {
        let data = self.data.lock().map_err(|_| AppError::LockPoisoned)?;
        Ok(data.clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<()> {
        let mut data = self.data.lock().map_err(|_| AppError::LockPoisoned)?;
        *data = contacts.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_replaces_the_whole_collection() -> Result<()> {
        let store = MemStore::with_contacts(vec![Contact::new("Uche", "", "081234567890")]);

        store.save(&[Contact::new("Alex", "", "082211334455")])?;

        assert_eq!(
            store.load()?,
            vec![Contact::new("Alex", "", "082211334455")]
        );
        Ok(())
    }
}
