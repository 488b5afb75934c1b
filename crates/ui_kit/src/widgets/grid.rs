use ui_grid::{layout_row, ColumnDescriptor, ColumnLayout, GridConfigError, MAX_COLUMNS};

use super::*;

/// One column of a [`Row`]: a layout descriptor paired with rendered content.
///
/// Rows accept only `GridColumn` values, so anything that is not
/// column-shaped is rejected by the type system instead of by runtime shape
/// inspection.
pub struct GridColumn {
    descriptor: ColumnDescriptor,
    content: View,
}

impl GridColumn {
    /// Pairs a layout descriptor with the content it positions.
    pub fn new(descriptor: ColumnDescriptor, content: impl IntoView) -> Self {
        Self {
            descriptor,
            content: content.into_view(),
        }
    }
}

/// CSS custom properties carrying one column's placement at every breakpoint.
///
/// The external CSS layer maps `--col-start-*`/`--col-span-*` to
/// `grid-column` declarations inside its breakpoint media queries.
fn placement_style(layout: &ColumnLayout) -> String {
    let mut style = String::new();
    for (breakpoint, placement) in layout.iter() {
        let token = breakpoint.token();
        style.push_str(&format!(
            "--col-start-{token}:{};--col-span-{token}:{};",
            placement.start, placement.span,
        ));
    }
    style
}

#[component]
/// Responsive grid row over a 24-track layout.
///
/// Placement is computed once per render by [`ui_grid::layout_row`]. Capacity
/// overflow is advisory: each reported overflow logs one warning and the row
/// still renders. A configuration fault (breakpoint rules without an `xs`
/// seed) renders as an error for the enclosing `ErrorBoundary` to handle.
pub fn Row(
    #[prop(default = RowJustify::Start)] justify: RowJustify,
    #[prop(default = RowAlign::Top)] align: RowAlign,
    #[prop(optional)] gutter: Option<u32>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    columns: Vec<GridColumn>,
) -> impl IntoView {
    let descriptors: Vec<ColumnDescriptor> =
        columns.iter().map(|column| column.descriptor).collect();
    let rendered: Result<View, GridConfigError> = layout_row(&descriptors).map(|layout| {
        for overflow in &layout.overflows {
            logging::warn!(
                "grid row exceeds {MAX_COLUMNS} tracks at {}: over by {}",
                overflow.breakpoint.token(),
                overflow.excess,
            );
        }

        let cols = columns
            .into_iter()
            .zip(layout.columns.iter())
            .map(|(column, placements)| {
                view! {
                    <div
                        class="ui-col"
                        style=placement_style(placements)
                        data-ui-primitive="true"
                        data-ui-kind="col"
                    >
                        {column.content}
                    </div>
                }
            })
            .collect_view();

        view! {
            <div
                class=merge_layout_class("ui-row", layout_class)
                style=gutter.map(|gutter| format!("--row-gutter:{gutter}px;"))
                data-ui-primitive="true"
                data-ui-kind="row"
                data-ui-slot=ui_slot
                data-ui-justify=justify.token()
                data-ui-align=align.token()
                data-ui-gutter=gutter.map(|gutter| gutter.to_string())
            >
                {cols}
            </div>
        }
        .into_view()
    });
    rendered
}
