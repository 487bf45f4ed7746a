//! Core types for Postboard.
//!
//! This module provides type-safe wrappers for the remote API's entity IDs.

pub mod id;

pub use id::*;
