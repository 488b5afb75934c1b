use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Named responsive thresholds, ordered narrowest to widest.
///
/// The order is significant: it is the iteration order of the layout engine
/// and the direction in which a value declared at a narrower breakpoint
/// propagates to wider breakpoints left unspecified.
pub enum Breakpoint {
    /// Narrowest breakpoint; seeds every wider breakpoint left unspecified.
    Xs,
    /// Small viewports.
    Sm,
    /// Medium viewports.
    Md,
    /// Large viewports.
    Lg,
    /// Widest breakpoint.
    Xl,
}

impl Breakpoint {
    /// Number of supported breakpoints.
    pub const COUNT: usize = 5;

    /// Every breakpoint in ascending (narrow to wide) order.
    pub const ORDERED: [Breakpoint; Self::COUNT] =
        [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// Stable lowercase token used in DOM attributes and CSS custom
    /// properties.
    pub fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Minimum viewport width, in CSS pixels, at which this breakpoint
    /// becomes active.
    pub fn min_width(self) -> u32 {
        match self {
            Self::Xs => 0,
            Self::Sm => 576,
            Self::Md => 768,
            Self::Lg => 992,
            Self::Xl => 1200,
        }
    }

    /// Picks the active breakpoint for a viewport width.
    ///
    /// This is a convenience for callers wiring layout output to an actual
    /// viewport; [`crate::layout_row`] itself produces output for every
    /// breakpoint and never reads widths.
    pub fn for_width(width: u32) -> Breakpoint {
        Self::ORDERED
            .into_iter()
            .rev()
            .find(|breakpoint| width >= breakpoint.min_width())
            .unwrap_or(Self::Xs)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ordered_list_is_narrow_to_wide() {
        let widths: Vec<u32> = Breakpoint::ORDERED
            .into_iter()
            .map(Breakpoint::min_width)
            .collect();
        let mut sorted = widths.clone();
        sorted.sort_unstable();
        assert_eq!(widths, sorted);
    }

    #[test]
    fn for_width_picks_widest_matching_threshold() {
        assert_eq!(Breakpoint::for_width(0), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(575), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(576), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_width(800), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(1024), Breakpoint::Lg);
        assert_eq!(Breakpoint::for_width(2560), Breakpoint::Xl);
    }
}
