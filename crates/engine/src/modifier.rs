//! Prompt-driven list rewriting.
//!
//! A modifier turns one user intent (add, rename, delete) into a complete
//! replacement list. It owns input gathering and validation but never
//! touches persistence; what happens to the result is the manager's call.

use async_trait::async_trait;
use roster_core::error::{RosterError, RosterResult};
use roster_core::types::{ItemId, ListItem};
use roster_provider::{ListSource, MutationPrompts, NameValidator};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

/// Rewrites the list for one mutation kind.
///
/// Implementations return the *entire* next list rather than a patch; the
/// caller treats it as authoritative. Deletion is infallible once confirmed:
/// filtering an id that is no longer present yields the unchanged list.
#[async_trait]
pub trait Modify: Send + Sync {
    type Item: ListItem;

    /// Gathers and validates a name, then appends a freshly minted item.
    async fn add_new(&self) -> RosterResult<Vec<Self::Item>>;

    /// Gathers and validates a replacement name for `item`, then rewrites
    /// the entry carrying its id.
    async fn edit(&self, item: &Self::Item) -> RosterResult<Vec<Self::Item>>;

    /// Confirms the deletion, then filters `item` out of the list by id.
    async fn delete(&self, item: &Self::Item) -> Vec<Self::Item>;
}

// ---------------------------------------------------------------------------
// Stock implementation
// ---------------------------------------------------------------------------

/// [`Modify`] wired to a list source, user prompts, and a name validator.
///
/// Stateless between calls: every operation snapshots the source afresh, so
/// the modifier never holds a list that could go stale.
pub struct ListModifier<S: ListSource> {
    source: Arc<S>,
    prompts: Arc<dyn MutationPrompts>,
    validator: Arc<dyn NameValidator>,
}

impl<S: ListSource> ListModifier<S> {
    pub fn new(
        source: Arc<S>,
        prompts: Arc<dyn MutationPrompts>,
        validator: Arc<dyn NameValidator>,
    ) -> Self {
        Self {
            source,
            prompts,
            validator,
        }
    }

    /// Validates `name` and only then snapshots the list, so a rejected
    /// name never costs a source read.
    fn checked_list(&self, name: &str) -> RosterResult<Vec<S::Item>> {
        self.validator.validate(name)?;
        Ok(self.source.current_list())
    }

    fn rename_in(
        &self,
        mut list: Vec<S::Item>,
        id: &ItemId,
        name: &str,
    ) -> RosterResult<Vec<S::Item>> {
        if !list.iter().any(|entry| entry.id() == id) {
            return Err(RosterError::ItemNotFound(id.clone()));
        }
        for entry in list.iter_mut() {
            if entry.id() == id {
                *entry = self.source.make_item(Some(id.clone()), name);
            }
        }
        Ok(list)
    }
}

#[async_trait]
impl<S: ListSource + 'static> Modify for ListModifier<S> {
    type Item = S::Item;

    async fn add_new(&self) -> RosterResult<Vec<S::Item>> {
        let name = self.prompts.prompt_add().await;
        let mut list = self.checked_list(&name)?;
        list.push(self.source.make_item(None, &name));
        Ok(list)
    }

    async fn edit(&self, item: &S::Item) -> RosterResult<Vec<S::Item>> {
        let name = self.prompts.prompt_rename(item.name()).await;
        let list = self.checked_list(&name)?;
        self.rename_in(list, item.id(), &name)
    }

    async fn delete(&self, item: &S::Item) -> Vec<S::Item> {
        self.prompts.confirm_delete(item.name()).await;
        let mut list = self.source.current_list();
        list.retain(|entry| entry.id() != item.id());
        list
    }
}
