//! Domain types for the roster list engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Opaque, stable identity token for a list item.
///
/// Assigned once at creation and never reassigned; the engine correlates
/// items exclusively by id, never by name or position. Any string is a valid
/// token, so externally minted ids survive round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Mints a fresh UUIDv4-backed identity.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ---------------------------------------------------------------------------
// Item contract
// ---------------------------------------------------------------------------

/// Capability bound for anything the engine can manage: a stable comparable
/// identity plus a name that changes only by whole-value replacement.
///
/// Implementations are value types from the engine's perspective; a rename
/// produces a *new* item carrying the same id.
pub trait ListItem: Clone + Send + Sync + 'static {
    fn id(&self) -> &ItemId;
    fn name(&self) -> &str;
}

/// Stock item type used by the shipped adapters and the CLI.
///
/// The engine itself is generic over any [`ListItem`]; hosts with richer
/// item models implement the trait on their own types instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: ItemId,
    pub name: String,
}

impl RosterEntry {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl ListItem for RosterEntry {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// The gated mutation kinds. Reordering is deliberately absent: it bypasses
/// the policy gate and goes straight to synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Edit,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Delete => "delete",
        })
    }
}
