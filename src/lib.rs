//! Renders structured data as a plain-text tree diagram.
//!
//! A [`PrettyTree`] describes a value as a labeled tree; [`PrettyTree::render`]
//! turns it into a multi-line string drawn with box-drawing connectors, in the
//! style of a directory listing:
//!
//! ```
//! use prettytree::PrettyTree;
//!
//! let tree = PrettyTree::branch(
//!     "Root",
//!     [
//!         PrettyTree::value("a"),
//!         PrettyTree::branch("Child", [PrettyTree::value("b")]),
//!     ],
//! );
//! assert_eq!(
//!     tree.render()?,
//!     "Root\n\
//!      ├╼\u{2009}a\n\
//!      ╰╼\u{2009}Child\n\
//!      \u{20}  ╰╼\u{2009}b"
//! );
//! # prettytree::Result::Ok(())
//! ```
//!
//! Types describe themselves by implementing [`ToPrettyTree`]; the
//! [`PrettyTree::key_value`] constructor collapses scalar fields onto a single
//! `key: value` line while structured fields nest as a labeled subtree.
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub use self::{
    convert::ToPrettyTree,
    formatter::{Error, Result},
    tree::{Branch, PrettyTree},
};

pub(crate) mod convert;
pub(crate) mod formatter;
pub(crate) mod tree;
pub(crate) mod truncate;
