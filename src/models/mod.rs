//! Wire models of the library management API

pub mod book;
pub mod client;
pub mod enums;
pub mod loan;
pub mod page;

// Re-export commonly used types
pub use book::Book;
pub use client::Client;
pub use enums::Genre;
pub use loan::{BookRef, ClientRef, Loan};
pub use page::{Page, PageRequest};
