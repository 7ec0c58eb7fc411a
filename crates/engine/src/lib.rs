//! List mutation pipeline: policy gate, prompt-driven modifier, remote sync.
//!
//! ```ignore
//! let manager = build_manager(remote, source, policy, prompts, validator, errors);
//! manager.add_new().await;             // prompt, validate, append, upload
//! manager.delete(&item).await;         // confirm, filter, upload with tombstone
//! manager.upload_reordered_list(&l).await; // straight to the store
//! ```

pub mod composite;
pub mod manager;
pub mod modifier;

pub use composite::build_manager;
pub use manager::ListManager;
pub use modifier::{ListModifier, Modify};
