//! Mang Compiler driver.
//!
//! The binary is a thin argument dispatcher; the commands live here so they
//! can be tested without spawning a process.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
