#[macro_use]
mod macros;
pub mod book_client;

pub use book_client::*;
