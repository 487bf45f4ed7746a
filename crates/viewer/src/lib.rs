//! Postboard Viewer library.
//!
//! This crate provides the viewer functionality as a library, allowing it
//! to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod render;
