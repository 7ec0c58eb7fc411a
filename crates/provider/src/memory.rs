//! In-memory list source.

use crate::ListSource;
use roster_core::types::{ItemId, RosterEntry};
use std::sync::Mutex;

/// Mutex-guarded working list for hosts without a model layer of their own.
///
/// ```ignore
/// let roster = MemoryRoster::from_entries(store.load().await?);
/// ```
pub struct MemoryRoster {
    entries: Mutex<Vec<RosterEntry>>,
}

impl MemoryRoster {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn from_entries(entries: Vec<RosterEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl Default for MemoryRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl ListSource for MemoryRoster {
    type Item = RosterEntry;

    fn current_list(&self) -> Vec<RosterEntry> {
        self.entries.lock().expect("roster entries lock").clone()
    }

    fn make_item(&self, id: Option<ItemId>, name: &str) -> RosterEntry {
        RosterEntry::new(id.unwrap_or_else(ItemId::fresh), name)
    }
}
