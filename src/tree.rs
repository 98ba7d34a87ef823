//! Tree model.

use crate::{
    convert::ToPrettyTree,
    truncate::{quote_truncated, STRING_LIMIT},
};

/// A renderable tree node.
///
/// The closed set of node shapes the renderer understands. Values are
/// immutable once constructed; build a new tree instead of mutating one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrettyTree {
    /// Renders as nothing.
    Empty,
    /// A leaf holding raw text, rendered debug-quoted and truncated.
    String(String),
    /// A leaf holding pre-formatted text, rendered verbatim.
    Value(String),
    /// A labeled node with ordered children.
    Branch(Branch),
    /// Ordered sibling trees with no enclosing label.
    ///
    /// No layout is defined for fragments yet; rendering one fails with
    /// [`Error::UnsupportedFragment`](crate::Error::UnsupportedFragment).
    Fragment(Vec<PrettyTree>),
}

/// A labeled node with an ordered sequence of child trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// Node label, emitted as the branch's own line.
    label: String,
    /// Child trees, rendered in order beneath the label.
    children: Vec<PrettyTree>,
}

impl Branch {
    /// Creates a branch from a label and its children.
    ///
    /// Both the label and the children may be empty; a childless branch
    /// renders exactly like a [`PrettyTree::Value`] leaf holding the label.
    pub fn new(label: impl Into<String>, children: impl IntoIterator<Item = PrettyTree>) -> Self {
        Self {
            label: label.into(),
            children: children.into_iter().collect(),
        }
    }

    /// Returns the node label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the child trees in rendering order.
    pub fn children(&self) -> &[PrettyTree] {
        &self.children
    }
}

impl PrettyTree {
    /// Creates a labeled branch node.
    ///
    /// ```
    /// use prettytree::PrettyTree;
    ///
    /// let tree = PrettyTree::branch("Pair", [PrettyTree::value("1"), PrettyTree::value("2")]);
    /// assert_eq!(tree.render()?, "Pair\n├╼\u{2009}1\n╰╼\u{2009}2");
    /// # prettytree::Result::Ok(())
    /// ```
    pub fn branch(label: impl Into<String>, children: impl IntoIterator<Item = PrettyTree>) -> Self {
        Self::Branch(Branch::new(label, children))
    }

    /// Creates a leaf from pre-formatted text, rendered verbatim.
    pub fn value(text: impl Into<String>) -> Self {
        Self::Value(text.into())
    }

    /// Creates a leaf from raw text.
    ///
    /// Raw text is rendered debug-quoted, and truncated in the middle when it
    /// exceeds 50 characters.
    pub fn string(text: impl Into<String>) -> Self {
        Self::String(text.into())
    }

    /// Creates a fragment from an ordered sequence of sibling trees.
    pub fn fragment(items: impl IntoIterator<Item = PrettyTree>) -> Self {
        Self::Fragment(items.into_iter().collect())
    }

    /// Creates a node for a named field of a self-describing value.
    ///
    /// Scalar descriptions collapse onto a single `key: value` line;
    /// structured descriptions nest as a branch labeled with the key. This
    /// keeps leaf fields from paying a level of indentation:
    ///
    /// ```
    /// use prettytree::PrettyTree;
    ///
    /// assert_eq!(PrettyTree::key_value("x", &1), PrettyTree::value("x: 1"));
    /// assert_eq!(
    ///     PrettyTree::key_value("xs", &vec![1, 2]),
    ///     PrettyTree::branch(
    ///         "xs",
    ///         [PrettyTree::branch("Array", [PrettyTree::value("1"), PrettyTree::value("2")])],
    ///     )
    /// );
    /// ```
    pub fn key_value<T>(key: impl Into<String>, value: &T) -> Self
    where
        T: ToPrettyTree + ?Sized,
    {
        match value.to_pretty_tree() {
            Self::Value(text) => Self::Value(format!("{}: {}", key.into(), text)),
            Self::String(text) => Self::Value(format!(
                "{}: {}",
                key.into(),
                quote_truncated(&text, STRING_LIMIT)
            )),
            description => Self::branch(key, [description]),
        }
    }
}
