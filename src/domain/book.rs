use crate::domain::Contact;
use crate::errors::Result;
use crate::store::ContactStore;

/// Single source of truth for the contact collection.
///
/// The storage handle is injected so tests can swap the JSON file for an
/// in-memory fake. Every mutation is a whole-collection read-modify-write:
/// load the current list, apply the change, write the list back. That keeps
/// each operation O(n), which is fine at address-book scale.
///
/// The book does not enforce the name-uniqueness invariant itself; callers
/// check `exists_by_name` before `add` or a rename.
pub struct ContactBook {
    store: Box<dyn ContactStore>,
}

impl ContactBook {
    pub fn new(store: Box<dyn ContactStore>) -> Self {
        ContactBook { store }
    }

    /// Full collection in persisted order.
    pub fn load(&self) -> Result<Vec<Contact>> {
        self.store.load()
    }

    /// First contact with an exact (case-sensitive) name match. Absence is
    /// `None`, not an error; the caller decides whether that is a 404.
    pub fn find(&self, name: &str) -> Result<Option<Contact>> {
        Ok(self.load()?.into_iter().find(|c| c.name == name))
    }

    pub fn exists_by_name(&self, name: &str) -> Result<bool> {
        Ok(self.load()?.iter().any(|c| c.name == name))
    }

    /// Appends and persists. Does not check for duplicates.
    pub fn add(&self, contact: Contact) -> Result<()> {
        let mut contacts = self.load()?;
        contacts.push(contact);
        self.store.save(&contacts)
    }

    /// Replaces the fields of the contact named `old_name` and persists.
    /// A missing `old_name` is a silent no-op: the unchanged collection is
    /// written back.
    pub fn update(&self, old_name: &str, contact: Contact) -> Result<()> {
        let mut contacts = self.load()?;
        if let Some(entry) = contacts.iter_mut().find(|c| c.name == old_name) {
            *entry = contact;
        }
        self.store.save(&contacts)
    }

    /// Removes the first contact matching `name` and persists. A missing
    /// name persists an unchanged collection.
    pub fn delete(&self, name: &str) -> Result<()> {
        let mut contacts = self.load()?;
        if let Some(index) = contacts.iter().position(|c| c.name == name) {
            contacts.remove(index);
        }
        self.store.save(&contacts)
    }
}
