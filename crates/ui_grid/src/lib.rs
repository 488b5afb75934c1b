//! Responsive row layout engine for a fixed 24-track grid.
//!
//! The crate owns the breakpoint-aware span/offset resolution used by the
//! widget layer's `Row` component: given an ordered list of column
//! descriptors, [`layout_row`] produces a `(start, span)` placement for every
//! column at every [`Breakpoint`], and reports rows that exceed the grid
//! capacity as advisory diagnostics.
//!
//! Layout is a pure, synchronous function of its inputs. The engine holds no
//! state between calls and never inspects viewport widths; picking the active
//! breakpoint for an actual viewport is the caller's concern.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod breakpoint;
mod column;
mod engine;

pub use breakpoint::Breakpoint;
pub use column::{ColumnDescriptor, ColumnRule};
pub use engine::{
    layout_row, CapacityOverflow, ColumnLayout, GridConfigError, Placement, RowLayout,
    MAX_COLUMNS,
};
