//! Domain logic shared by the database and HTTP layers.
//!
//! Nothing in this crate performs I/O. The reconciliation plan, identity
//! classification and field rules live here so they can be unit tested
//! without a database.

pub mod coerce;
pub mod entity_ref;
pub mod error;
pub mod program;
pub mod reconcile;
pub mod types;
