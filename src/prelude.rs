pub use crate::config::Config;
pub use crate::domain::{Contact, ContactBook};
pub use crate::errors::AppError;
pub use crate::store::{ContactStore, JsonStore, MemStore};
