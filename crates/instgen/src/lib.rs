//! Generates an instruction enumeration and a matching name table from a
//! plain list of instruction names.

pub mod code_generator;
pub mod config;
pub mod list_compiler;
pub mod types;
