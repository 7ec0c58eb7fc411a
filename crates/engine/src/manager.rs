//! Operation orchestration: policy gate, modifier, remote sync, error sink.

use crate::modifier::Modify;
use roster_core::error::RosterResult;
use roster_core::types::ListItem;
use roster_provider::{ErrorSink, MutationPolicy, RemoteStore};
use std::sync::Arc;

/// Runs each mutation through the same pipeline: verify against policy,
/// rewrite through the modifier, push the result to the remote store. The
/// first stage to fail stops the run and delivers exactly one error to the
/// sink; operations themselves return nothing.
///
/// A stage that never resolves (an abandoned prompt) stalls the returned
/// future. Dropping that future abandons the operation cleanly: no
/// mutation, no upload, no report.
///
/// `Manager` holds no list state of its own, so a single instance can be
/// shared across tasks; every operation re-reads the source through the
/// modifier.
pub struct ListManager<R, M>
where
    R: RemoteStore,
    M: Modify<Item = R::Item>,
{
    policy: Arc<dyn MutationPolicy>,
    modifier: M,
    remote: Arc<R>,
    errors: Arc<dyn ErrorSink>,
}

impl<R, M> ListManager<R, M>
where
    R: RemoteStore,
    M: Modify<Item = R::Item>,
{
    pub fn new(
        policy: Arc<dyn MutationPolicy>,
        modifier: M,
        remote: Arc<R>,
        errors: Arc<dyn ErrorSink>,
    ) -> Self {
        Self {
            policy,
            modifier,
            remote,
            errors,
        }
    }

    /// Adds an item named through the prompts.
    pub async fn add_new(&self) {
        if let Err(e) = self.try_add().await {
            self.errors.report(&e);
        }
    }

    /// Renames `item` via the prompts, keeping its identity and position.
    pub async fn edit(&self, item: &R::Item) {
        if let Err(e) = self.try_edit(item).await {
            self.errors.report(&e);
        }
    }

    /// Removes `item` after user confirmation.
    pub async fn delete(&self, item: &R::Item) {
        if let Err(e) = self.try_delete(item).await {
            self.errors.report(&e);
        }
    }

    /// Pushes a host-reordered list straight to the remote store.
    ///
    /// Reordering changes no item's identity or name, so it skips the
    /// policy gate and the modifier entirely.
    pub async fn upload_reordered_list(&self, list: &[R::Item]) {
        match self.remote.upload(list, None).await {
            Ok(()) => tracing::info!(items = list.len(), "reorder committed"),
            Err(e) => self.errors.report(&e),
        }
    }

    async fn try_add(&self) -> RosterResult<()> {
        self.policy.verify_can_add()?;
        let list = self.modifier.add_new().await?;
        self.remote.upload(&list, None).await?;
        tracing::info!(items = list.len(), "add committed");
        Ok(())
    }

    async fn try_edit(&self, item: &R::Item) -> RosterResult<()> {
        self.policy.verify_can_edit()?;
        let list = self.modifier.edit(item).await?;
        self.remote.upload(&list, None).await?;
        tracing::info!(id = %item.id(), items = list.len(), "edit committed");
        Ok(())
    }

    async fn try_delete(&self, item: &R::Item) -> RosterResult<()> {
        self.policy.verify_can_delete()?;
        let list = self.modifier.delete(item).await;
        // The caller's item rides along so the store can archive it even
        // though it no longer appears in the list.
        self.remote.upload(&list, Some(item)).await?;
        tracing::info!(id = %item.id(), items = list.len(), "delete committed");
        Ok(())
    }
}
