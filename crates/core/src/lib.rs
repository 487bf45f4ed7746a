//! Postboard Core - Shared types library.
//!
//! This crate provides the entity ID types used across the Postboard
//! components:
//! - `viewer` - Fetches and renders employee posts
//! - `integration-tests` - End-to-end tests against the viewer library
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe entity IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
