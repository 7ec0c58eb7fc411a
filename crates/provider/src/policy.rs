//! Stock mutation policies.

use crate::MutationPolicy;
use roster_core::error::{RosterError, RosterResult};
use roster_core::types::Operation;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Permits every operation. The default gate for hosts without quotas or
/// entitlement tiers.
pub struct AllowAll;

impl MutationPolicy for AllowAll {
    fn verify_can_add(&self) -> RosterResult<()> {
        Ok(())
    }

    fn verify_can_edit(&self) -> RosterResult<()> {
        Ok(())
    }

    fn verify_can_delete(&self) -> RosterResult<()> {
        Ok(())
    }
}

/// Caps list growth at a fixed item count.
///
/// The policy judges operation kinds only, so it cannot see the list; the
/// host keeps the count current via [`QuotaPolicy::set_count`]. Edits and
/// deletes always pass.
pub struct QuotaPolicy {
    max_items: usize,
    count: AtomicUsize,
}

impl QuotaPolicy {
    pub fn new(max_items: usize) -> Self {
        Self {
            max_items,
            count: AtomicUsize::new(0),
        }
    }

    pub fn set_count(&self, count: usize) {
        self.count.store(count, Ordering::Relaxed);
    }
}

impl MutationPolicy for QuotaPolicy {
    fn verify_can_add(&self) -> RosterResult<()> {
        let count = self.count.load(Ordering::Relaxed);
        if count >= self.max_items {
            return Err(RosterError::denied(
                Operation::Add,
                format!("quota of {} items reached", self.max_items),
            ));
        }
        Ok(())
    }

    fn verify_can_edit(&self) -> RosterResult<()> {
        Ok(())
    }

    fn verify_can_delete(&self) -> RosterResult<()> {
        Ok(())
    }
}
