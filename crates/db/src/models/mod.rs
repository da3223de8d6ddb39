//! Row models and request DTOs, one submodule per table group.

pub mod active_program;
pub mod catalog;
pub mod program;
