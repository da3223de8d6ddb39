//! Diff planning for "reconcile ordered children".
//!
//! Given the identifiers currently persisted under one parent and the
//! classified identifiers of the incoming children, decide which rows to
//! delete, which to update and how many to insert. The database layer runs
//! the plan; this module only computes it.

use std::collections::HashSet;

use crate::entity_ref::EntityRef;
use crate::error::CoreError;
use crate::types::DbId;

/// Outcome of diffing one parent's children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildPlan {
    /// Persisted ids absent from the incoming list, in persisted order.
    pub to_delete: Vec<DbId>,
    /// Incoming `Existing` ids that are persisted under this parent.
    pub to_update: Vec<DbId>,
    /// Incoming `Existing` ids that are not persisted under this parent.
    /// Either they belong to another parent or they no longer exist.
    pub foreign: Vec<DbId>,
    /// Number of incoming `New` entries.
    pub to_insert: usize,
}

impl ChildPlan {
    /// True when running the plan would touch no rows at this level.
    pub fn is_noop(&self) -> bool {
        self.to_delete.is_empty() && self.to_update.is_empty() && self.to_insert == 0
    }
}

/// Compute the plan for one parent.
///
/// Fails with [`CoreError::Validation`] if the same `Existing` id appears
/// twice among the incoming siblings, since the resulting row content would
/// depend on update order.
pub fn plan_children(existing: &[DbId], incoming: &[EntityRef]) -> Result<ChildPlan, CoreError> {
    let seen = ensure_unique_existing(incoming)?;
    let persisted: HashSet<DbId> = existing.iter().copied().collect();
    let mut plan = ChildPlan::default();

    for entity in incoming {
        match entity {
            EntityRef::Existing(id) => {
                if persisted.contains(id) {
                    plan.to_update.push(*id);
                } else {
                    plan.foreign.push(*id);
                }
            }
            EntityRef::New => plan.to_insert += 1,
        }
    }

    plan.to_delete = existing
        .iter()
        .copied()
        .filter(|id| !seen.contains(id))
        .collect();

    Ok(plan)
}

/// Check that no `Existing` id repeats among siblings, returning the set of
/// referenced ids.
pub fn ensure_unique_existing(incoming: &[EntityRef]) -> Result<HashSet<DbId>, CoreError> {
    let mut seen = HashSet::with_capacity(incoming.len());
    for id in incoming.iter().filter_map(EntityRef::id) {
        if !seen.insert(id) {
            return Err(CoreError::Validation(format!(
                "id {id} appears more than once in the same list"
            )));
        }
    }
    Ok(seen)
}
