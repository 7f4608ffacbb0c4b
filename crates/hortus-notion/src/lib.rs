//! Notion content fetcher for Hortus.
//!
//! This crate is the real [`ContentSource`](hortus_core::ContentSource)
//! implementation: it queries the Notion REST API for the post database and
//! the home page, walks each page's block tree, and converts the blocks to
//! a single Markdown document that the rest of the system treats as opaque
//! text.
//!
//! # Modules
//!
//! - [`client`]: [`NotionClient`] and its explicit [`NotionConfig`]
//! - [`markdown`]: block tree → Markdown conversion
//! - [`types`]: Notion wire types (pages, properties, rich text, blocks)
//! - [`error`]: Error types and Result alias
//!
//! Configuration is passed in as a [`NotionConfig`] value; nothing in this
//! crate reads the process environment.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod markdown;
pub mod types;

pub use client::{NotionClient, NotionConfig};
pub use error::{Error, Result};
