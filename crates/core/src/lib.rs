//! Domain models, item identity, and error definitions.
//!
//! Foundation crate -- no async or I/O dependencies.

pub mod error;
pub mod types;

pub use error::{RosterError, RosterResult};
pub use types::{ItemId, ListItem, Operation, RosterEntry};
