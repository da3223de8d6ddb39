//! Reconciliation of a program's nested children against persisted rows.
//!
//! A client sends the complete desired tree (workouts → exercises → sets).
//! For each parent, [`reconcile_children`] diffs the incoming list against
//! the persisted child ids, deletes the dropped rows (descendants first),
//! updates the retained ones and inserts the new ones, then recurses into
//! every surviving child. The algorithm is written once and instantiated per
//! level through [`ChildLevel`]; see [`levels`].
//!
//! Everything runs on a single connection inside the caller's transaction.

pub mod error;
pub mod levels;

use std::ops::AddAssign;

use async_trait::async_trait;
use sqlx::PgConnection;
use wrkt_core::entity_ref::EntityRef;
use wrkt_core::reconcile::plan_children;
use wrkt_core::types::DbId;

pub use error::ReconcileError;
pub use levels::{ExerciseLevel, SetLevel, WorkoutLevel};

/// Row counts touched by a reconciliation, summed across levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub inserted: u64,
    pub updated: u64,
    pub deleted: u64,
}

impl AddAssign for ReconcileStats {
    fn add_assign(&mut self, other: Self) {
        self.inserted += other.inserted;
        self.updated += other.updated;
        self.deleted += other.deleted;
    }
}

/// One level of the program tree: how to read, delete, update and insert
/// children of a given parent, and how to descend into a child.
#[async_trait]
pub trait ChildLevel: Sync {
    /// Incoming payload for one child.
    type Item: Send + Sync;

    /// Entity name used in logs and errors.
    const ENTITY: &'static str;

    /// Classified identifier of an incoming child.
    fn entity_ref(item: &Self::Item) -> EntityRef;

    /// Ids of the children currently persisted under `parent_id`.
    async fn existing_ids(
        &self,
        conn: &mut PgConnection,
        parent_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error>;

    /// Remove every descendant of child `id`, bottom-up. Returns rows deleted.
    async fn delete_descendants(
        &self,
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<u64, sqlx::Error>;

    /// Remove child `id` itself. Its descendants are already gone.
    async fn delete(&self, conn: &mut PgConnection, id: DbId) -> Result<u64, sqlx::Error>;

    /// Update child `id`, guarded by ownership: returns `false` if no row
    /// with that id belongs to `parent_id`.
    async fn update(
        &self,
        conn: &mut PgConnection,
        parent_id: DbId,
        id: DbId,
        item: &Self::Item,
    ) -> Result<bool, sqlx::Error>;

    /// Insert a new child under `parent_id`, returning its generated id.
    async fn insert(
        &self,
        conn: &mut PgConnection,
        parent_id: DbId,
        item: &Self::Item,
    ) -> Result<DbId, sqlx::Error>;

    /// Reconcile the children of child `id` from its incoming payload.
    async fn reconcile_descendants(
        &self,
        conn: &mut PgConnection,
        id: DbId,
        item: &Self::Item,
    ) -> Result<ReconcileStats, ReconcileError>;
}

/// Make the children of `parent_id` match `incoming` exactly.
///
/// Deletions run before any update or insert at this level, and each
/// deleted child loses its descendants before the child row itself goes.
/// An `Existing` id that is not persisted under `parent_id` aborts with
/// [`ReconcileError::ReferenceViolation`] before anything at this level is
/// written.
pub async fn reconcile_children<L: ChildLevel>(
    level: &L,
    conn: &mut PgConnection,
    parent_id: DbId,
    incoming: &[L::Item],
) -> Result<ReconcileStats, ReconcileError> {
    let existing = level.existing_ids(conn, parent_id).await?;
    let refs: Vec<EntityRef> = incoming.iter().map(L::entity_ref).collect();
    let plan = plan_children(&existing, &refs)?;

    if let Some(id) = plan.foreign.first() {
        return Err(ReconcileError::ReferenceViolation(format!(
            "{} {id} does not belong to parent {parent_id}",
            L::ENTITY
        )));
    }

    tracing::debug!(
        entity = L::ENTITY,
        parent_id,
        delete = plan.to_delete.len(),
        update = plan.to_update.len(),
        insert = plan.to_insert,
        "Reconciling children"
    );

    let mut stats = ReconcileStats::default();

    for &id in &plan.to_delete {
        stats.deleted += level.delete_descendants(conn, id).await?;
        stats.deleted += level.delete(conn, id).await?;
    }

    for (item, entity) in incoming.iter().zip(&refs) {
        let id = match *entity {
            EntityRef::Existing(id) => {
                if !level.update(conn, parent_id, id, item).await? {
                    return Err(ReconcileError::ReferenceViolation(format!(
                        "{} {id} does not belong to parent {parent_id}",
                        L::ENTITY
                    )));
                }
                stats.updated += 1;
                id
            }
            EntityRef::New => {
                let id = level.insert(conn, parent_id, item).await?;
                stats.inserted += 1;
                id
            }
        };
        stats += level.reconcile_descendants(conn, id, item).await?;
    }

    Ok(stats)
}
