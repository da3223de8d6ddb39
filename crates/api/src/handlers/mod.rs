pub mod active_program;
pub mod catalog;
pub mod program;
pub mod reference;
