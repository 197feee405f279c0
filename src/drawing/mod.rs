//! Drawable text trees
//!
//! A drawing is a closed tree of nodes. Each node renders to a text
//! fragment and a sequence renders its children left to right with no
//! separator. Rendering never mutates the tree, so the same tree always
//! renders to the same string.

use crate::config::{DrawingConfig, NegativeLengthPolicy};
use crate::debug::{self, DebugCategory, DebugConfig, LogLevel};
use crate::errors::DrawError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod builder;
pub mod greeting;


pub use builder::{Drawing, either};
pub use greeting::make_greeting;

/// Fill character used by [`Drawable::stars`]
pub const STAR: char = '*';

/// Upper bound on the buffer `render` reserves up front
const MAX_RENDER_PREALLOC: usize = 64 * 1024;

/// A node in a drawing tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Drawable {
    /// Literal text
    Text(String),
    /// A single space
    Space,
    /// `length` copies of `fill`
    Repeat { length: usize, fill: char },
    /// Child rendered with ASCII upper-case mapping
    UpperCase(Box<Drawable>),
    /// Children rendered in order
    Sequence(Vec<Drawable>),
}

impl Drawable {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn space() -> Self {
        Self::Space
    }

    /// Run of `length` stars
    pub fn stars(length: usize) -> Self {
        Self::repeat(length, STAR)
    }

    pub fn repeat(length: usize, fill: char) -> Self {
        Self::Repeat { length, fill }
    }

    pub fn upper_case(content: Drawable) -> Self {
        Self::UpperCase(Box::new(content))
    }

    pub fn sequence(elements: impl IntoIterator<Item = Drawable>) -> Self {
        Self::Sequence(elements.into_iter().collect())
    }

    /// Star run from a signed length, applying `policy` when it is negative
    pub fn stars_checked(length: i64, policy: NegativeLengthPolicy) -> Result<Self, DrawError> {
        Self::repeat_checked(length, STAR, policy)
    }

    /// Repeat run from a signed length, applying `policy` when it is negative
    pub fn repeat_checked(
        length: i64,
        fill: char,
        policy: NegativeLengthPolicy,
    ) -> Result<Self, DrawError> {
        if length < 0 {
            return match policy {
                NegativeLengthPolicy::Reject => Err(DrawError::negative_length(length)),
                NegativeLengthPolicy::Clamp => {
                    log::debug!(
                        target: DebugCategory::Builder.target(),
                        "clamping negative repeat length {} to 0",
                        length
                    );
                    Ok(Self::repeat(0, fill))
                }
            };
        }

        let length = usize::try_from(length).unwrap_or(usize::MAX);
        Ok(Self::repeat(length, fill))
    }

    /// Run from a signed length using the configured fill and policy
    pub fn run_with(length: i64, config: &DrawingConfig) -> Result<Self, DrawError> {
        Self::repeat_checked(length, config.fill, config.negative_length)
    }

    /// Render the tree to a new string
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.width().min(MAX_RENDER_PREALLOC));
        self.render_into(&mut out);
        out
    }

    /// Append the rendered tree to `out`
    pub fn render_into(&self, out: &mut String) {
        match self {
            Drawable::Text(content) => out.push_str(content),
            Drawable::Space => out.push(' '),
            Drawable::Repeat { length, fill } => {
                out.extend(std::iter::repeat_n(*fill, *length));
            }
            Drawable::UpperCase(content) => {
                let start = out.len();
                content.render_into(out);
                out[start..].make_ascii_uppercase();
            }
            Drawable::Sequence(elements) => {
                for element in elements {
                    element.render_into(out);
                }
            }
        }
    }

    /// Render while emitting records under the `Render` category
    pub fn render_with_debug(&self, config: &DebugConfig) -> String {
        debug::log(
            config,
            DebugCategory::Render,
            LogLevel::Debug,
            &format!(
                "[Render] depth={} width={}",
                self.depth(),
                self.width()
            ),
        );

        if config.allows(DebugCategory::Render, LogLevel::Trace) {
            match serde_json::to_string(self) {
                Ok(json) => debug::log(
                    config,
                    DebugCategory::Render,
                    LogLevel::Trace,
                    &format!("[Render] tree={}", json),
                ),
                Err(err) => debug::log(
                    config,
                    DebugCategory::Render,
                    LogLevel::Warn,
                    &format!("[Render] could not serialize tree: {}", err),
                ),
            }
        }

        self.render()
    }

    /// Number of chars `render` produces, saturating at `usize::MAX`
    pub fn width(&self) -> usize {
        match self {
            Drawable::Text(content) => content.chars().count(),
            Drawable::Space => 1,
            Drawable::Repeat { length, .. } => *length,
            Drawable::UpperCase(content) => content.width(),
            Drawable::Sequence(elements) => elements
                .iter()
                .map(Drawable::width)
                .fold(0, usize::saturating_add),
        }
    }

    /// Height of the tree; a leaf has depth 1
    pub fn depth(&self) -> usize {
        match self {
            Drawable::Text(_) | Drawable::Space | Drawable::Repeat { .. } => 1,
            Drawable::UpperCase(content) => 1 + content.depth(),
            Drawable::Sequence(elements) => {
                1 + elements.iter().map(Drawable::depth).max().unwrap_or(0)
            }
        }
    }
}

impl fmt::Display for Drawable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Drawable {
    fn from(content: &str) -> Self {
        Self::text(content)
    }
}

impl From<String> for Drawable {
    fn from(content: String) -> Self {
        Self::Text(content)
    }
}
