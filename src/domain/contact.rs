use serde::{Deserialize, Serialize};

/// A single address-book entry. The name doubles as the lookup key used in
/// URLs, so it is expected to be unique across the store (callers check with
/// `ContactBook::exists_by_name` before inserting or renaming).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Eq, PartialOrd, Ord)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        Contact {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }
}
