//! Tonewise - skin undertone analysis service
//!
//! HTTP front end and CLI around the `skin-tone` crate.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
