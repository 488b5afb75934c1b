//! Shared control, grid, data-display, and overlay widgets.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod grid;
mod overlays;

pub use controls::{
    Button, Checkbox, CheckboxGroup, GroupOption, Input, Radio, RadioGroup, Select, Slider,
    Switch,
};
pub use data_display::Tag;
pub use grid::{GridColumn, Row};
pub use overlays::Modal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard bordered button.
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Dashed-border button.
    Dashed,
    /// Borderless text button.
    Text,
    /// Danger/destructive button.
    Danger,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Dashed => "dashed",
            Self::Text => "text",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button shape tokens.
pub enum ButtonShape {
    /// Default rounded-corner rectangle.
    Standard,
    /// Pill-shaped button.
    Round,
    /// Circular icon-only button.
    Circle,
}

impl Default for ButtonShape {
    fn default() -> Self {
        Self::Standard
    }
}

impl ButtonShape {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Round => "round",
            Self::Circle => "circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared input-field variants.
pub enum InputVariant {
    /// Standard bordered input.
    Standard,
    /// Borderless inline input.
    Borderless,
}

impl Default for InputVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl InputVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Borderless => "borderless",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic tag tones.
pub enum TagTone {
    /// Default neutral tone.
    Neutral,
    /// Success/status tone.
    Success,
    /// Warning tone.
    Warning,
    /// Danger tone.
    Danger,
    /// Accent/informational tone.
    Accent,
}

impl Default for TagTone {
    fn default() -> Self {
        Self::Neutral
    }
}

impl TagTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Accent => "accent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Horizontal distribution of a grid row's columns.
pub enum RowJustify {
    /// Pack columns at the start.
    Start,
    /// Center columns.
    Center,
    /// Pack columns at the end.
    End,
    /// Distribute leftover space between columns.
    SpaceBetween,
    /// Distribute leftover space around columns.
    SpaceAround,
}

impl Default for RowJustify {
    fn default() -> Self {
        Self::Start
    }
}

impl RowJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
            Self::SpaceBetween => "space-between",
            Self::SpaceAround => "space-around",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Vertical alignment of a grid row's columns.
pub enum RowAlign {
    /// Align column tops.
    Top,
    /// Center columns vertically.
    Middle,
    /// Align column bottoms.
    Bottom,
}

impl Default for RowAlign {
    fn default() -> Self {
        Self::Top
    }
}

impl RowAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn merge_layout_class_appends_only_non_empty_extras() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("toolbar-action")),
            "ui-button toolbar-action",
        );
    }

    #[test]
    fn bool_token_is_stable() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
