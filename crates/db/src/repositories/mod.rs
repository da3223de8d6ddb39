//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Multi-statement writes open their
//! own transaction and settle it before returning.

pub mod active_program_repo;
pub mod catalog_repo;
pub mod equipment_repo;
pub mod muscle_group_repo;
pub mod program_repo;

pub use active_program_repo::ActiveProgramRepo;
pub use catalog_repo::CatalogRepo;
pub use equipment_repo::EquipmentRepo;
pub use muscle_group_repo::MuscleGroupRepo;
pub use program_repo::ProgramRepo;
