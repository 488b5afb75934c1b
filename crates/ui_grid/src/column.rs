use serde::{Deserialize, Serialize};

use crate::breakpoint::Breakpoint;
use crate::engine::MAX_COLUMNS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
/// One breakpoint override on a [`ColumnDescriptor`].
///
/// Serializes the way column props are written upstream: either a bare span
/// number or a `{span, offset}` pair.
pub enum ColumnRule {
    /// Bare span. A bare rule never carries its own offset; the offset falls
    /// back to the column's declared default.
    Span(u32),
    /// Span paired with an optional offset override.
    SpanOffset {
        /// Tracks occupied at this breakpoint.
        span: u32,
        /// Empty tracks inserted before the span. Falls back to the column's
        /// declared default offset when omitted.
        offset: Option<u32>,
    },
}

impl ColumnRule {
    pub(crate) fn span(self) -> u32 {
        match self {
            Self::Span(span) | Self::SpanOffset { span, .. } => span,
        }
    }

    pub(crate) fn offset(self, default_offset: u32) -> u32 {
        match self {
            Self::Span(_) => default_offset,
            Self::SpanOffset { offset, .. } => offset.unwrap_or(default_offset),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Layout inputs for one column of a row.
///
/// A descriptor either relies on its uniform span/offset pair at every
/// breakpoint, or opts into responsive placement by attaching per-breakpoint
/// rules. A descriptor that attaches any rule must attach one at
/// [`Breakpoint::Xs`]; that rule seeds the values wider breakpoints inherit.
pub struct ColumnDescriptor {
    span: Option<u32>,
    offset: Option<u32>,
    rules: [Option<ColumnRule>; Breakpoint::COUNT],
}

impl ColumnDescriptor {
    /// Descriptor with no props: the column fills the whole row at every
    /// breakpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the uniform span in tracks.
    pub fn span(mut self, span: u32) -> Self {
        self.span = Some(span);
        self
    }

    /// Sets the uniform offset in tracks.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Attaches an override rule at one breakpoint.
    pub fn at(mut self, breakpoint: Breakpoint, rule: ColumnRule) -> Self {
        self.rules[breakpoint.index()] = Some(rule);
        self
    }

    /// The rule attached at `breakpoint`, if any.
    pub fn rule(&self, breakpoint: Breakpoint) -> Option<ColumnRule> {
        self.rules[breakpoint.index()]
    }

    /// Whether any breakpoint rule is attached.
    pub fn has_rules(&self) -> bool {
        self.rules.iter().any(Option::is_some)
    }

    /// Offset applied wherever no rule supplies one.
    pub(crate) fn default_offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }

    /// Span applied when no breakpoint rules are attached.
    pub(crate) fn uniform_span(&self) -> u32 {
        self.span.unwrap_or(MAX_COLUMNS)
    }
}
