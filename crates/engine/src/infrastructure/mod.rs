//! Infrastructure implementations.
//!
//! Contains the process-facing pieces: randomness and configuration.

pub mod random;
pub mod settings;
