//! Composition root for the stock pipeline.

use crate::manager::ListManager;
use crate::modifier::ListModifier;
use roster_provider::{
    ErrorSink, ListSource, MutationPolicy, MutationPrompts, NameValidator, RemoteStore,
};
use std::sync::Arc;

/// Wires a [`ListModifier`] and a [`ListManager`] around one item type.
///
/// The single structural requirement is that the source and the remote
/// agree on the item type; everything else is behavior the caller supplies.
/// Hosts with a custom [`crate::Modify`] implementation build the manager
/// directly instead.
///
/// ```ignore
/// let manager = build_manager(remote, source, policy, prompts, validator, errors);
/// manager.add_new().await;
/// ```
pub fn build_manager<R, S>(
    remote: Arc<R>,
    source: Arc<S>,
    policy: Arc<dyn MutationPolicy>,
    prompts: Arc<dyn MutationPrompts>,
    validator: Arc<dyn NameValidator>,
    errors: Arc<dyn ErrorSink>,
) -> ListManager<R, ListModifier<S>>
where
    R: RemoteStore,
    S: ListSource<Item = R::Item> + 'static,
{
    let modifier = ListModifier::new(source, prompts, validator);
    ListManager::new(policy, modifier, remote, errors)
}
