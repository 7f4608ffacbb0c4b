//! Hortus Core — shared types, traits, and errors.
//!
//! This crate provides the foundational types used across all Hortus crates.
//! It has no internal Hortus dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: Post metadata, footer links, and page content types
//! - [`source`]: The [`ContentSource`] capability trait

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod source;
pub mod types;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use source::ContentSource;
pub use types::{FooterLink, HomeContent, Post, PostMeta};
