//! Tree formatter.

use crate::tree::PrettyTree;
use crate::truncate::{quote_truncated, STRING_LIMIT};

/// Tree render result.
pub type Result<T> = std::result::Result<T, Error>;

/// Tree render error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempt to render a fragment, which has no defined layout yet.
    #[error("fragment rendering is not yet supported")]
    UnsupportedFragment,
}

/// Thin space separating the connector stub from the node text.
const THIN_SPACE: char = '\u{2009}';

/// Box-drawing glyph contributed by one ancestor column to a line's prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    /// Blank continuation beneath a finished last sibling.
    Blank,
    /// Start corner. Reserved for a top-anchored style; the current
    /// algorithm never produces it.
    #[allow(dead_code)]
    CornerRight,
    /// Vertical rule beneath a sibling with more content below.
    VerticalBar,
    /// Connector for a child with further siblings below it.
    TeeRight,
    /// Connector for the last child.
    ElbowRight,
}

impl Column {
    /// Returns the glyph drawn for this column.
    fn glyph(self) -> char {
        match self {
            Self::Blank => ' ',
            Self::CornerRight => '╭',
            Self::VerticalBar => '│',
            Self::TeeRight => '├',
            Self::ElbowRight => '╰',
        }
    }
}

/// Per-node rendering state: one column marker per ancestor depth level.
///
/// A formatter is an immutable value. Descending into a child builds a fresh
/// formatter, so sibling subtrees never observe each other's column rewrites.
#[derive(Debug, Clone, Default)]
struct Formatter {
    /// Ancestor column markers, outermost first.
    columns: Vec<Column>,
}

impl Formatter {
    /// Creates the root formatter, which draws no leading connector.
    fn root() -> Self {
        Self::default()
    }

    /// Creates the formatter for a child one level down.
    ///
    /// Connectors of enclosing levels are rewritten for the lines below
    /// them: a tee keeps its vertical rule running, an elbow's rule has
    /// ended and goes blank. The child's own connector is appended last.
    fn child(&self, is_last: bool) -> Self {
        let mut columns: Vec<Column> = self
            .columns
            .iter()
            .map(|column| match column {
                Column::TeeRight => Column::VerticalBar,
                Column::ElbowRight => Column::Blank,
                other => *other,
            })
            .collect();
        columns.push(if is_last {
            Column::ElbowRight
        } else {
            Column::TeeRight
        });
        Self { columns }
    }

    /// Returns the leading prefix for this node's line.
    ///
    /// Column glyphs joined with two spaces, then the horizontal stub and a
    /// thin space in front of the node text. The root prefix is empty.
    fn leading(&self) -> String {
        if self.columns.is_empty() {
            return String::new();
        }
        let mut leading = String::new();
        for (ix, column) in self.columns.iter().enumerate() {
            if ix > 0 {
                leading.push_str("  ");
            }
            leading.push(column.glyph());
        }
        leading.push('╼');
        leading.push(THIN_SPACE);
        leading
    }

    /// Renders a single leaf line.
    fn leaf(&self, text: &str) -> String {
        format!("{}{}", self.leading(), text)
    }

    /// Renders a labeled branch and its children.
    ///
    /// A childless branch is exactly the leaf line for its label.
    fn branch(&self, label: &str, children: &[PrettyTree]) -> Result<String> {
        let mut lines = vec![self.leaf(label)];
        let last_ix = children.len().wrapping_sub(1);
        for (ix, child) in children.iter().enumerate() {
            lines.push(child.format(&self.child(ix == last_ix))?);
        }
        Ok(lines.join("\n"))
    }
}

impl PrettyTree {
    /// Renders one node with the given ancestor-column state.
    fn format(&self, formatter: &Formatter) -> Result<String> {
        match self {
            Self::Empty => Ok(String::new()),
            Self::Value(text) => Ok(formatter.leaf(text)),
            Self::String(text) => Ok(formatter.leaf(&quote_truncated(text, STRING_LIMIT))),
            Self::Branch(branch) => formatter.branch(branch.label(), branch.children()),
            Self::Fragment(_) => Err(Error::UnsupportedFragment),
        }
    }

    /// Renders the tree as multi-line text.
    ///
    /// Each non-[`Empty`](Self::Empty) node contributes one line, prefixed
    /// with the box-drawing connectors of its ancestors. Rendering fails only
    /// for trees containing a [`Fragment`](Self::Fragment) node.
    ///
    /// ```
    /// use prettytree::PrettyTree;
    ///
    /// let tree = PrettyTree::branch(
    ///     "Node",
    ///     [
    ///         PrettyTree::key_value("id", &7),
    ///         PrettyTree::branch("children", [PrettyTree::string("leaf")]),
    ///     ],
    /// );
    /// assert_eq!(
    ///     tree.render()?,
    ///     "Node\n\
    ///      ├╼\u{2009}id: 7\n\
    ///      ╰╼\u{2009}children\n\
    ///      \u{20}  ╰╼\u{2009}\"leaf\""
    /// );
    /// # prettytree::Result::Ok(())
    /// ```
    pub fn render(&self) -> Result<String> {
        self.format(&Formatter::root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts the non-`Empty` label/leaf nodes of a fragment-free tree.
    fn node_count(tree: &PrettyTree) -> usize {
        match tree {
            PrettyTree::Empty => 0,
            PrettyTree::String(_) | PrettyTree::Value(_) => 1,
            PrettyTree::Branch(branch) => {
                1 + branch.children().iter().map(node_count).sum::<usize>()
            }
            PrettyTree::Fragment(_) => unreachable!("fragments are not renderable"),
        }
    }

    #[test]
    fn root_leaf_has_no_prefix() {
        assert_eq!(PrettyTree::value("a").render(), Ok("a".to_owned()));
    }

    #[test]
    fn empty_root_renders_as_empty_string() {
        assert_eq!(PrettyTree::Empty.render(), Ok(String::new()));
    }

    #[test]
    fn string_root_is_quoted_and_truncated() {
        assert_eq!(
            PrettyTree::string("hi").render(),
            Ok("\"hi\"".to_owned())
        );

        let long = "z".repeat(51);
        let rendered = PrettyTree::string(long).render().unwrap();
        assert_eq!(
            rendered,
            format!("\"{}…{}\"", "z".repeat(25), "z".repeat(24))
        );
    }

    #[test]
    fn childless_branch_equals_value_leaf() {
        let branch = PrettyTree::branch("label", []);
        assert_eq!(branch.render(), PrettyTree::value("label").render());
    }

    #[test]
    fn two_generation_tree() {
        let tree = PrettyTree::branch(
            "Root",
            [
                PrettyTree::value("a"),
                PrettyTree::branch("Child", [PrettyTree::value("b")]),
            ],
        );

        let expected = "Root\n\
                        ├╼\u{2009}a\n\
                        ╰╼\u{2009}Child\n\
                        \u{20}  ╰╼\u{2009}b";
        assert_eq!(tree.render(), Ok(expected.to_owned()));
    }

    #[test]
    fn mid_sibling_branch_keeps_vertical_rule() {
        let tree = PrettyTree::branch(
            "Root",
            [
                PrettyTree::branch("A", [PrettyTree::value("x"), PrettyTree::value("y")]),
                PrettyTree::value("z"),
            ],
        );

        let expected = "Root\n\
                        ├╼\u{2009}A\n\
                        │  ├╼\u{2009}x\n\
                        │  ╰╼\u{2009}y\n\
                        ╰╼\u{2009}z";
        assert_eq!(tree.render(), Ok(expected.to_owned()));
    }

    #[test]
    fn sibling_subtrees_do_not_share_column_rewrites() {
        // Both subtrees nest two levels; the first sits above a continuing
        // rule, the second above a finished one.
        let subtree = |label: &str| {
            PrettyTree::branch(label, [PrettyTree::branch("m", [PrettyTree::value("d")])])
        };
        let tree = PrettyTree::branch("Root", [subtree("A"), subtree("B")]);

        let expected = "Root\n\
                        ├╼\u{2009}A\n\
                        │  ╰╼\u{2009}m\n\
                        │     ╰╼\u{2009}d\n\
                        ╰╼\u{2009}B\n\
                        \u{20}  ╰╼\u{2009}m\n\
                        \u{20}     ╰╼\u{2009}d";
        assert_eq!(tree.render(), Ok(expected.to_owned()));
    }

    #[test]
    fn line_count_matches_node_count() {
        let tree = PrettyTree::branch(
            "Root",
            [
                PrettyTree::branch("A", [PrettyTree::value("x"), PrettyTree::string("y")]),
                PrettyTree::branch("B", []),
                PrettyTree::branch(
                    "C",
                    [PrettyTree::branch("m", [PrettyTree::value("d")])],
                ),
            ],
        );

        let rendered = tree.render().unwrap();
        assert_eq!(rendered.lines().count(), node_count(&tree));
    }

    #[test]
    fn empty_sibling_contributes_a_blank_line() {
        let tree = PrettyTree::branch("Root", [PrettyTree::Empty, PrettyTree::value("a")]);

        let expected = "Root\n\
                        \n\
                        ╰╼\u{2009}a";
        assert_eq!(tree.render(), Ok(expected.to_owned()));
    }

    #[test]
    fn fragment_rendering_is_unsupported() {
        let fragment = PrettyTree::fragment([PrettyTree::value("a")]);
        assert_eq!(fragment.render(), Err(Error::UnsupportedFragment));
    }

    #[test]
    fn empty_fragment_rendering_is_unsupported() {
        assert_eq!(
            PrettyTree::fragment([]).render(),
            Err(Error::UnsupportedFragment)
        );
    }

    #[test]
    fn nested_fragment_aborts_rendering() {
        let tree = PrettyTree::branch("Root", [PrettyTree::fragment([])]);
        assert_eq!(tree.render(), Err(Error::UnsupportedFragment));
    }
}
