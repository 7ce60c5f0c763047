//! # Overview
//!
//! This crate derives edit scripts between two XML documents. Both documents are first
//! [linearized] into a pre-order sequence of [Node]s, each labelled with its tag, attribute or a
//! [terminal][Label::Terminal] marker. The sequences are then partitioned into [Fragment]s,
//! named after the side they come from, and matched against each other to produce a list of
//! [Update][Edit::Update], [Delete][Edit::Delete] and [Insert][Edit::Insert] operations.
//!
//! Fragments are compared either by label alone, or also by the [word distance][word_distance]
//! between their texts, see [Mode].
//!
//! # Example
//!
//! ```rust
//! use xml_edit_script::*;
//!
//! let config = Config::default();
//!
//! let source = linearize("<a/>", &config)?;
//! let target = linearize("<a><b/></a>", &config)?;
//!
//! let edits = diff(&source, &target, &config)?;
//! assert_eq!(report(&edits), "Delete: a\nInsert: a\n");
//!
//! let patched = patch(&edits);
//! assert_eq!(patched, target);
//!
//! assert_eq!(
//!     serialize(&patched, config.mode)?,
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<a>\n  <b/>\n</a>\n"
//! );
//! # Ok::<(), Error>(())
//! ```

mod config;
mod cost;
mod diff;
mod distance;
mod edit;
mod error;
mod fragment;
mod index;
mod linearize;
mod node;
mod patch;
mod serialize;
mod words;

pub use config::*;
pub use cost::*;
pub use diff::*;
pub use distance::*;
pub use edit::*;
pub use error::*;
pub use fragment::*;
pub use index::*;
pub use linearize::*;
pub use node::*;
pub use patch::*;
pub use serialize::*;
pub use words::*;

mod tracing_macros;
