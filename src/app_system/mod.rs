//! System orchestration, configuration, startup, and shutdown logic.

pub mod contact_system;
pub mod settings;
pub mod tracing;

pub use contact_system::*;
pub use settings::*;
pub use self::tracing::*;
