//! Library crate root re-exporting settings, launcher and runtime modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod launcher;
pub mod runtime;
pub mod settings;
