pub mod json;
pub mod memory;

pub use json::JsonStore;
pub use memory::MemStore;

use crate::domain::Contact;
use crate::errors::Result;

/// Persistence seam for the contact collection. The collection is always
/// read and written as a whole unit.
pub trait ContactStore: Send + Sync {
    fn load(&self) -> Result<Vec<Contact>>;

    fn save(&self, contacts: &[Contact]) -> Result<()>;
}
