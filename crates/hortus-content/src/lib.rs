//! Markdown transforms for Hortus.
//!
//! This crate holds the pure text transforms the page assembler composes:
//!
//! - [`footer`]: split a Markdown document into body and footer links
//! - [`html`]: render Markdown to HTML with the site's styled tag set
//! - [`date`]: human-readable date formatting
//!
//! Everything here is synchronous, side-effect free, and total over its
//! string inputs; the crate performs no I/O.
//!
//! # Example
//!
//! ```rust
//! use hortus_content::footer::split_footer;
//!
//! let doc = "Welcome to the garden.\n# Footer\n[github](https://github.com/montekkundan)\n";
//! let split = split_footer(doc);
//! assert_eq!(split.body, "Welcome to the garden.");
//! assert_eq!(split.links[0].name, "github");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod date;
pub mod footer;
pub mod html;

// Re-export commonly used items
pub use date::readable_date;
pub use footer::{split_footer, FooterSplit};
pub use html::render_html;
