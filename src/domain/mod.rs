pub mod book;
pub mod contact;

pub use book::ContactBook;
pub use contact::Contact;
