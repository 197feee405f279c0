//! Declarative drawing composition
//!
//! `draw!` builds a sequence from its arguments, `caps!` wraps them in an
//! upper-case node and [`either`] picks one of two branches. [`Drawing`]
//! offers the same composition as a chained builder.

use super::Drawable;
use crate::debug::DebugCategory;

/// Build a [`Drawable::Sequence`] from the listed nodes.
///
/// Arguments are converted with `Drawable::from`, so string literals become
/// text nodes.
///
/// ```rust
/// use lectern::{draw, Drawable};
///
/// let line = draw![Drawable::stars(2), "Hi", Drawable::stars(2)];
/// assert_eq!(line.render(), "**Hi**");
/// ```
#[macro_export]
macro_rules! draw {
    () => {
        $crate::drawing::Drawable::Sequence(::std::vec::Vec::new())
    };
    ($($node:expr),+ $(,)?) => {
        $crate::drawing::Drawable::Sequence(::std::vec![
            $($crate::drawing::Drawable::from($node)),+
        ])
    };
}

/// Wrap the listed nodes in a [`Drawable::UpperCase`].
///
/// A single argument is wrapped directly; several are wrapped as a sequence.
///
/// ```rust
/// use lectern::{caps, Drawable};
///
/// assert_eq!(caps!["shout"].render(), "SHOUT");
/// assert_eq!(caps!["a", Drawable::space(), "b"].render(), "A B");
/// ```
#[macro_export]
macro_rules! caps {
    ($node:expr $(,)?) => {
        $crate::drawing::Drawable::upper_case($crate::drawing::Drawable::from($node))
    };
    ($($node:expr),+ $(,)?) => {
        $crate::drawing::Drawable::upper_case($crate::draw![$($node),+])
    };
}

/// Pick `first` when `condition` holds, `second` otherwise
pub fn either(condition: bool, first: Drawable, second: Drawable) -> Drawable {
    if condition { first } else { second }
}

/// Chained builder producing a sequence node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drawing {
    nodes: Vec<Drawable>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node
    pub fn push(mut self, node: impl Into<Drawable>) -> Self {
        self.nodes.push(node.into());
        self
    }

    /// Append a node only when `condition` holds
    pub fn push_if(self, condition: bool, node: impl Into<Drawable>) -> Self {
        if condition { self.push(node) } else { self }
    }

    /// Append `first` or `second` depending on `condition`
    pub fn push_either(
        self,
        condition: bool,
        first: impl Into<Drawable>,
        second: impl Into<Drawable>,
    ) -> Self {
        let node = either(condition, first.into(), second.into());
        self.push(node)
    }

    /// Append the node if present
    pub fn push_some(self, node: Option<Drawable>) -> Self {
        match node {
            Some(node) => self.push(node),
            None => self,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finish as a sequence node
    pub fn build(self) -> Drawable {
        log::trace!(
            target: DebugCategory::Builder.target(),
            "built sequence of {} nodes",
            self.nodes.len()
        );
        Drawable::Sequence(self.nodes)
    }

    /// Finish as an upper-cased sequence node
    pub fn build_caps(self) -> Drawable {
        Drawable::upper_case(self.build())
    }
}

impl FromIterator<Drawable> for Drawing {
    fn from_iter<I: IntoIterator<Item = Drawable>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl From<Drawing> for Drawable {
    fn from(drawing: Drawing) -> Self {
        drawing.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_macro_builds_sequence() {
        let line = draw![Drawable::stars(1), "x", Drawable::space()];
        assert_eq!(
            line,
            Drawable::Sequence(vec![
                Drawable::stars(1),
                Drawable::text("x"),
                Drawable::Space,
            ])
        );
    }

    #[test]
    fn empty_draw_macro_renders_nothing() {
        assert_eq!(draw![].render(), "");
    }

    #[test]
    fn caps_macro_single_argument_wraps_directly() {
        assert_eq!(caps!["abc"], Drawable::upper_case(Drawable::text("abc")));
    }

    #[test]
    fn caps_macro_many_arguments_wraps_sequence() {
        let node = caps!["a", "b"];
        assert_eq!(
            node,
            Drawable::upper_case(Drawable::sequence([
                Drawable::text("a"),
                Drawable::text("b"),
            ]))
        );
        assert_eq!(node.render(), "AB");
    }

    #[test]
    fn either_picks_branch() {
        let first = Drawable::text("first");
        let second = Drawable::text("second");
        assert_eq!(either(true, first.clone(), second.clone()), first);
        assert_eq!(either(false, first, second.clone()), second);
    }

    #[test]
    fn builder_conditionals() {
        let drawing = Drawing::new()
            .push("a")
            .push_if(false, "skipped")
            .push_if(true, "b")
            .push_either(false, "x", "c")
            .push_some(None)
            .push_some(Some(Drawable::text("d")));

        assert_eq!(drawing.len(), 4);
        assert_eq!(drawing.build().render(), "abcd");
    }

    #[test]
    fn builder_caps_upper_cases_everything() {
        let node = Drawing::new()
            .push("hello")
            .push(Drawable::space())
            .push("world")
            .build_caps();
        assert_eq!(node.render(), "HELLO WORLD");
    }

    #[test]
    fn nested_builders_convert_into_nodes() {
        let inner = Drawing::new().push("in");
        let outer = Drawing::new().push(Drawable::stars(1)).push(inner).build();
        assert_eq!(outer.render(), "*in");
        assert_eq!(outer.depth(), 3);
    }

    #[test]
    fn collect_into_drawing() {
        let drawing: Drawing = ["a", "b", "c"].into_iter().map(Drawable::text).collect();
        assert!(!drawing.is_empty());
        assert_eq!(drawing.build().render(), "abc");
    }
}
