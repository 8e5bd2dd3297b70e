//! Rotating heart server library.
//!
//! This module exposes the server components for use in tests and binaries.

pub mod config;
pub mod state;
pub mod stream;
