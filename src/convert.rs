//! Conversion into the tree model.

use chrono::{DateTime, TimeZone};
use uuid::Uuid;

use crate::tree::{Branch, PrettyTree};

/// A value that can describe itself as a [`PrettyTree`].
///
/// Implement this for application types so they can be embedded in a tree,
/// typically via [`PrettyTree::key_value`]. Scalar types should describe
/// themselves as [`PrettyTree::Value`] (or [`PrettyTree::String`] for raw
/// text) so that the key/value constructor can collapse them onto a single
/// line; structured types should describe themselves as a branch.
pub trait ToPrettyTree {
    /// Returns this value's tree representation.
    fn to_pretty_tree(&self) -> PrettyTree;
}

impl ToPrettyTree for PrettyTree {
    fn to_pretty_tree(&self) -> PrettyTree {
        self.clone()
    }
}

impl ToPrettyTree for Branch {
    fn to_pretty_tree(&self) -> PrettyTree {
        PrettyTree::Branch(self.clone())
    }
}

impl<T: ToPrettyTree + ?Sized> ToPrettyTree for &T {
    fn to_pretty_tree(&self) -> PrettyTree {
        (**self).to_pretty_tree()
    }
}

impl ToPrettyTree for str {
    fn to_pretty_tree(&self) -> PrettyTree {
        PrettyTree::string(self)
    }
}

impl ToPrettyTree for String {
    fn to_pretty_tree(&self) -> PrettyTree {
        PrettyTree::string(self.clone())
    }
}

impl ToPrettyTree for char {
    fn to_pretty_tree(&self) -> PrettyTree {
        PrettyTree::string(self.to_string())
    }
}

impl ToPrettyTree for bool {
    fn to_pretty_tree(&self) -> PrettyTree {
        PrettyTree::value(self.to_string())
    }
}

/// Implements [`ToPrettyTree`] for integer types via their decimal rendering.
macro_rules! impl_to_pretty_tree_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToPrettyTree for $ty {
                fn to_pretty_tree(&self) -> PrettyTree {
                    PrettyTree::value(self.to_string())
                }
            }
        )*
    };
}

impl_to_pretty_tree_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: ToPrettyTree> ToPrettyTree for Option<T> {
    /// Describes `None` as the verbatim leaf `None`; a present value
    /// describes itself with no wrapper node.
    fn to_pretty_tree(&self) -> PrettyTree {
        match self {
            None => PrettyTree::value("None"),
            Some(value) => value.to_pretty_tree(),
        }
    }
}

impl<T: ToPrettyTree> ToPrettyTree for [T] {
    /// Describes a sequence as a branch labeled `Array`, one child per
    /// element in order.
    fn to_pretty_tree(&self) -> PrettyTree {
        PrettyTree::branch("Array", self.iter().map(ToPrettyTree::to_pretty_tree))
    }
}

impl<T: ToPrettyTree> ToPrettyTree for Vec<T> {
    fn to_pretty_tree(&self) -> PrettyTree {
        self.as_slice().to_pretty_tree()
    }
}

impl ToPrettyTree for Uuid {
    /// Describes the identifier as a quoted hyphenated form, already
    /// formatted so it never truncates.
    fn to_pretty_tree(&self) -> PrettyTree {
        PrettyTree::value(format!("{:?}", self.to_string()))
    }
}

impl<Tz: TimeZone> ToPrettyTree for DateTime<Tz> {
    /// Describes the timestamp as its RFC 3339 rendering.
    fn to_pretty_tree(&self) -> PrettyTree {
        PrettyTree::value(self.to_rfc3339())
    }
}
