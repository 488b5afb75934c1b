use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::breakpoint::Breakpoint;
use crate::column::ColumnDescriptor;

/// Total number of equal-width tracks in one row.
///
/// Tracks are addressed by 1-based indices; a placement's end marker may
/// legitimately equal `MAX_COLUMNS + 1`, so capacity checks compare against
/// that bound rather than `MAX_COLUMNS`.
pub const MAX_COLUMNS: u32 = 24;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Resolved position of one column at one breakpoint.
pub struct Placement {
    /// 1-based track index where the column begins.
    pub start: u32,
    /// Number of tracks the column occupies.
    pub span: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Per-breakpoint placements for one column, in input order of the row.
pub struct ColumnLayout {
    placements: [Placement; Breakpoint::COUNT],
}

impl ColumnLayout {
    /// Placement at one breakpoint.
    pub fn at(&self, breakpoint: Breakpoint) -> Placement {
        self.placements[breakpoint.index()]
    }

    /// Placements paired with their breakpoints, narrow to wide.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, Placement)> + '_ {
        Breakpoint::ORDERED
            .into_iter()
            .map(|breakpoint| (breakpoint, self.placements[breakpoint.index()]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Advisory diagnostic: a row's accumulated offsets and spans exceed the grid
/// capacity.
///
/// Wider breakpoints that merely inherit a narrower layout repeat its
/// overshoot, so each overflow is reported once, at the narrowest breakpoint
/// where its excess appears. Overflow degrades visually but corrupts nothing;
/// it never fails layout, and callers log or ignore it.
pub struct CapacityOverflow {
    /// Narrowest breakpoint at which the row overflows by [`Self::excess`].
    pub breakpoint: Breakpoint,
    /// Tracks by which the row exceeds the capacity bound.
    pub excess: u32,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Configuration faults that reject a whole row before any placement is
/// computed.
pub enum GridConfigError {
    /// A column attached breakpoint rules without the [`Breakpoint::Xs`] seed
    /// rule that wider breakpoints inherit from.
    #[error("column {column} declares breakpoint rules but omits the xs rule")]
    MissingBaseRule {
        /// Zero-based index of the offending column within the row.
        column: usize,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Output of [`layout_row`] for one row of columns.
pub struct RowLayout {
    /// Per-column placements, in input order.
    pub columns: Vec<ColumnLayout>,
    /// Capacity diagnostics, one per distinct overflow; see
    /// [`CapacityOverflow`].
    pub overflows: Vec<CapacityOverflow>,
}

/// Lays out one row of columns at every breakpoint.
///
/// Columns are placed strictly in input order. Each column first advances the
/// per-breakpoint track cursor by its resolved offset, then records the
/// cursor as its start, then advances the cursor by its resolved span. Both
/// channels resolve per breakpoint by folding over [`Breakpoint::ORDERED`]
/// carrying the last resolved value: a breakpoint with a rule updates the
/// accumulator, a breakpoint without one reuses it. The accumulator is seeded
/// fresh per column and never leaks to the next.
///
/// A row whose final cursor passes `MAX_COLUMNS + 1` at some breakpoint is
/// still laid out; the overshoot is reported in [`RowLayout::overflows`].
///
/// # Errors
///
/// Returns [`GridConfigError::MissingBaseRule`] when a column attaches
/// breakpoint rules but omits the `xs` rule. The whole row is rejected; no
/// partial layout is produced.
pub fn layout_row(columns: &[ColumnDescriptor]) -> Result<RowLayout, GridConfigError> {
    for (index, column) in columns.iter().enumerate() {
        if column.has_rules() && column.rule(Breakpoint::Xs).is_none() {
            return Err(GridConfigError::MissingBaseRule { column: index });
        }
    }

    // Next unoccupied 1-based track, per breakpoint.
    let mut cursors = [1u32; Breakpoint::COUNT];
    let mut layouts = Vec::with_capacity(columns.len());

    for column in columns {
        let default_offset = column.default_offset();

        // Fold accumulators. A column without rules keeps these uniform values
        // at every breakpoint; a column with rules always has an xs rule
        // (validated above), which overwrites both before the first placement
        // is recorded.
        let mut last_span = column.uniform_span();
        let mut last_offset = default_offset;

        let mut placements = [Placement::default(); Breakpoint::COUNT];
        for breakpoint in Breakpoint::ORDERED {
            if let Some(rule) = column.rule(breakpoint) {
                last_span = rule.span();
                last_offset = rule.offset(default_offset);
            }
            let cursor = &mut cursors[breakpoint.index()];
            *cursor += last_offset;
            placements[breakpoint.index()] = Placement {
                start: *cursor,
                span: last_span,
            };
            *cursor += last_span;
        }
        layouts.push(ColumnLayout { placements });
    }

    let mut overflows = Vec::new();
    let mut previous_excess = None;
    for breakpoint in Breakpoint::ORDERED {
        let end = cursors[breakpoint.index()];
        let excess = (end > MAX_COLUMNS + 1).then(|| end - (MAX_COLUMNS + 1));
        if let Some(excess) = excess {
            // A wider breakpoint inheriting the narrower layout repeats the
            // same excess; report the overflow where it first appears.
            if previous_excess != Some(excess) {
                overflows.push(CapacityOverflow { breakpoint, excess });
            }
        }
        previous_excess = excess;
    }

    Ok(RowLayout {
        columns: layouts,
        overflows,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::column::ColumnRule;

    fn placement(start: u32, span: u32) -> Placement {
        Placement { start, span }
    }

    fn placements_at(layout: &RowLayout, breakpoint: Breakpoint) -> Vec<Placement> {
        layout
            .columns
            .iter()
            .map(|column| column.at(breakpoint))
            .collect()
    }

    #[test]
    fn bare_column_fills_the_row_at_every_breakpoint() {
        let layout = layout_row(&[ColumnDescriptor::new()]).expect("layout");

        assert!(layout.overflows.is_empty());
        for (_, resolved) in layout.columns[0].iter() {
            assert_eq!(resolved, placement(1, MAX_COLUMNS));
        }
    }

    #[test]
    fn empty_row_yields_empty_layout() {
        let layout = layout_row(&[]).expect("layout");
        assert_eq!(layout, RowLayout::default());
    }

    #[test]
    fn spans_accumulate_left_to_right() {
        let row = [
            ColumnDescriptor::new().span(6),
            ColumnDescriptor::new().span(8),
            ColumnDescriptor::new().span(10),
        ];
        let layout = layout_row(&row).expect("layout");

        assert!(layout.overflows.is_empty());
        for breakpoint in Breakpoint::ORDERED {
            assert_eq!(
                placements_at(&layout, breakpoint),
                vec![placement(1, 6), placement(7, 8), placement(15, 10)],
            );
        }
    }

    #[test]
    fn offsets_advance_the_cursor_before_each_start() {
        let row = [
            ColumnDescriptor::new().span(4).offset(4),
            ColumnDescriptor::new().span(4).offset(6),
            ColumnDescriptor::new().span(4).offset(2),
        ];
        let layout = layout_row(&row).expect("layout");

        assert!(layout.overflows.is_empty());
        for breakpoint in Breakpoint::ORDERED {
            assert_eq!(
                placements_at(&layout, breakpoint),
                vec![placement(5, 4), placement(15, 4), placement(21, 4)],
            );
        }
    }

    #[test]
    fn xs_rule_propagates_to_every_wider_breakpoint() {
        let row = [ColumnDescriptor::new().at(Breakpoint::Xs, ColumnRule::Span(4))];
        let layout = layout_row(&row).expect("layout");

        for (_, resolved) in layout.columns[0].iter() {
            assert_eq!(resolved, placement(1, 4));
        }
    }

    #[test]
    fn paired_rule_carries_offset_rightward() {
        let row = [ColumnDescriptor::new().at(
            Breakpoint::Xs,
            ColumnRule::SpanOffset {
                span: 12,
                offset: Some(2),
            },
        )];
        let layout = layout_row(&row).expect("layout");

        for (_, resolved) in layout.columns[0].iter() {
            assert_eq!(resolved, placement(3, 12));
        }
    }

    #[test]
    fn wider_rule_overrides_and_then_propagates() {
        let row = [ColumnDescriptor::new()
            .at(Breakpoint::Xs, ColumnRule::Span(24))
            .at(
                Breakpoint::Md,
                ColumnRule::SpanOffset {
                    span: 8,
                    offset: Some(4),
                },
            )];
        let layout = layout_row(&row).expect("layout");
        let column = &layout.columns[0];

        assert_eq!(column.at(Breakpoint::Xs), placement(1, 24));
        assert_eq!(column.at(Breakpoint::Sm), placement(1, 24));
        assert_eq!(column.at(Breakpoint::Md), placement(5, 8));
        assert_eq!(column.at(Breakpoint::Lg), placement(5, 8));
        assert_eq!(column.at(Breakpoint::Xl), placement(5, 8));
    }

    #[test]
    fn bare_rule_uses_the_declared_default_offset() {
        let row = [ColumnDescriptor::new()
            .offset(3)
            .at(Breakpoint::Xs, ColumnRule::Span(6))];
        let layout = layout_row(&row).expect("layout");

        for (_, resolved) in layout.columns[0].iter() {
            assert_eq!(resolved, placement(4, 6));
        }
    }

    #[test]
    fn fold_accumulator_resets_per_column() {
        let row = [
            ColumnDescriptor::new()
                .at(Breakpoint::Xs, ColumnRule::Span(2))
                .at(
                    Breakpoint::Lg,
                    ColumnRule::SpanOffset {
                        span: 10,
                        offset: Some(5),
                    },
                ),
            ColumnDescriptor::new().at(Breakpoint::Xs, ColumnRule::Span(4)),
        ];
        let layout = layout_row(&row).expect("layout");
        let second = &layout.columns[1];

        // The second column must not inherit the first column's lg values.
        assert_eq!(second.at(Breakpoint::Lg), placement(16, 4));
        assert_eq!(second.at(Breakpoint::Xs), placement(3, 4));
    }

    #[test]
    fn overflow_is_reported_but_does_not_fail_layout() {
        let row = [ColumnDescriptor::new().span(MAX_COLUMNS + 1)];
        let layout = layout_row(&row).expect("layout");

        for (_, resolved) in layout.columns[0].iter() {
            assert_eq!(resolved, placement(1, MAX_COLUMNS + 1));
        }
        // Every breakpoint inherits the same overshoot: one diagnostic.
        assert_eq!(
            layout.overflows,
            vec![CapacityOverflow {
                breakpoint: Breakpoint::Xs,
                excess: 1,
            }],
        );
    }

    #[test]
    fn a_full_row_ending_on_the_capacity_bound_is_not_an_overflow() {
        let row = [
            ColumnDescriptor::new().span(12),
            ColumnDescriptor::new().span(12),
        ];
        let layout = layout_row(&row).expect("layout");
        assert!(layout.overflows.is_empty());
    }

    #[test]
    fn inherited_overflow_is_reported_at_its_narrowest_breakpoint() {
        let row = [ColumnDescriptor::new()
            .at(Breakpoint::Xs, ColumnRule::Span(12))
            .at(Breakpoint::Lg, ColumnRule::Span(30))];
        let layout = layout_row(&row).expect("layout");

        // xl inherits the lg layout and its overshoot; only lg is cited.
        assert_eq!(
            layout.overflows,
            vec![CapacityOverflow {
                breakpoint: Breakpoint::Lg,
                excess: 6,
            }],
        );
    }

    #[test]
    fn distinct_excesses_each_get_a_diagnostic() {
        let row = [ColumnDescriptor::new()
            .at(Breakpoint::Xs, ColumnRule::Span(26))
            .at(Breakpoint::Lg, ColumnRule::Span(30))];
        let layout = layout_row(&row).expect("layout");

        assert_eq!(
            layout.overflows,
            vec![
                CapacityOverflow {
                    breakpoint: Breakpoint::Xs,
                    excess: 2,
                },
                CapacityOverflow {
                    breakpoint: Breakpoint::Lg,
                    excess: 6,
                },
            ],
        );
    }

    #[test]
    fn missing_xs_rule_rejects_the_whole_row() {
        let row = [
            ColumnDescriptor::new().span(6),
            ColumnDescriptor::new().at(Breakpoint::Sm, ColumnRule::Span(4)),
        ];
        assert_eq!(
            layout_row(&row),
            Err(GridConfigError::MissingBaseRule { column: 1 }),
        );
    }

    #[test]
    fn layout_is_deterministic_across_calls() {
        let row = [
            ColumnDescriptor::new()
                .offset(1)
                .at(Breakpoint::Xs, ColumnRule::Span(6))
                .at(
                    Breakpoint::Md,
                    ColumnRule::SpanOffset {
                        span: 9,
                        offset: None,
                    },
                ),
            ColumnDescriptor::new().span(10).offset(2),
        ];
        let first = layout_row(&row).expect("layout");
        let second = layout_row(&row).expect("layout");
        assert_eq!(first, second);
    }
}
