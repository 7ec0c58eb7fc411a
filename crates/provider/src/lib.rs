//! Capability contracts for the roster engine, plus stock adapters.
//!
//! The engine core never touches a screen, a file, or a network socket
//! directly; everything it needs from the outside world enters through the
//! traits defined here. Hosts implement these against their own UI and
//! storage; the submodules ship ready-made adapters for common cases.

pub mod memory;
pub mod policy;
pub mod prompts;
pub mod remote;
pub mod rules;
pub mod sink;

use async_trait::async_trait;
use roster_core::error::{RosterError, RosterResult};
use roster_core::types::{ItemId, ListItem};

pub use memory::MemoryRoster;
pub use policy::{AllowAll, QuotaPolicy};
pub use prompts::ScriptedPrompts;
pub use remote::{JsonFileStore, NullRemote};
pub use rules::NameRules;
pub use sink::{LogSink, RecordingSink};

// ---------------------------------------------------------------------------
// Item supply
// ---------------------------------------------------------------------------

/// Supplies the current list snapshot and constructs items.
///
/// `make_item` is the single construction point for items: `id: None` mints
/// a fresh identity for an addition, `id: Some(..)` rebuilds an existing
/// item around its preserved identity for a rename.
pub trait ListSource: Send + Sync {
    type Item: ListItem;

    fn current_list(&self) -> Vec<Self::Item>;
    fn make_item(&self, id: Option<ItemId>, name: &str) -> Self::Item;
}

// ---------------------------------------------------------------------------
// User interaction
// ---------------------------------------------------------------------------

/// Asynchronous prompts answered by the host's user (or a script).
///
/// A prompt the user abandons simply never resolves; the engine relies on
/// the returned future being dropped rather than on an explicit cancel
/// signal, so no mutation and no error follow an unanswered prompt.
#[async_trait]
pub trait MutationPrompts: Send + Sync {
    /// Asks for the name of a new item.
    async fn prompt_add(&self) -> String;

    /// Asks for the replacement name of an existing item. `current` is the
    /// name on record, typically shown as the editable starting value.
    async fn prompt_rename(&self, current: &str) -> String;

    /// Asks the user to confirm a deletion. Resolving means "confirmed".
    async fn confirm_delete(&self, name: &str);
}

// ---------------------------------------------------------------------------
// Gates
// ---------------------------------------------------------------------------

/// Pre-mutation authorization gate, consulted before any prompt is shown.
///
/// Checks are synchronous and argument-free: the policy judges the
/// *operation kind* against ambient host state (quotas, locks, tiers), not
/// the specific item.
pub trait MutationPolicy: Send + Sync {
    fn verify_can_add(&self) -> RosterResult<()>;
    fn verify_can_edit(&self) -> RosterResult<()>;
    fn verify_can_delete(&self) -> RosterResult<()>;
}

/// Judges whether a user-supplied name is acceptable.
pub trait NameValidator: Send + Sync {
    fn validate(&self, name: &str) -> RosterResult<()>;
}

// ---------------------------------------------------------------------------
// Persistence and error delivery
// ---------------------------------------------------------------------------

/// Destination for the authoritative list after every accepted mutation.
///
/// `removed` carries the item a deletion removed so stores can archive or
/// tombstone it; it is `None` for every other operation.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    type Item: ListItem;

    async fn upload(&self, list: &[Self::Item], removed: Option<&Self::Item>) -> RosterResult<()>;
}

/// Terminal sink for errors the engine surfaces. Exactly one report is
/// delivered per failed operation; delivery is fire-and-forget.
pub trait ErrorSink: Send + Sync {
    fn report(&self, error: &RosterError);
}
