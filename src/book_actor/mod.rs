//! The service that owns the contact book and reconciles it with the
//! remote gateway.

pub mod error;
pub mod outcome;
pub mod service;

pub use error::*;
pub use outcome::*;
pub use service::*;
