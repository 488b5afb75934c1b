//! Presentational widget library built on Leptos.
//!
//! The crate owns reusable form controls, overlays, tags, a centralized icon
//! API, and a responsive `Row` grid driven by the [`ui_grid`] layout
//! engine. Every widget speaks the stable `data-ui-*` DOM contract consumed
//! by external CSS layers; visual styling, theming, and animation live
//! entirely outside this crate.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod widgets;

pub use icon::{provide_icon_cache, Icon, IconCache, IconName, IconSize};
pub use widgets::{
    Button, ButtonShape, ButtonSize, ButtonVariant, Checkbox, CheckboxGroup, GridColumn,
    GroupOption, Input, InputVariant, Modal, Radio, RadioGroup, Row, RowAlign, RowJustify,
    Select, Slider, Switch, Tag, TagTone,
};

/// Convenience imports for application crates consuming the widget set.
pub mod prelude {
    pub use crate::{
        provide_icon_cache, Button, ButtonShape, ButtonSize, ButtonVariant, Checkbox,
        CheckboxGroup, GridColumn, GroupOption, Icon, IconCache, IconName, IconSize, Input,
        InputVariant, Modal, Radio, RadioGroup, Row, RowAlign, RowJustify, Select, Slider,
        Switch, Tag, TagTone,
    };
    pub use ui_grid::{Breakpoint, ColumnDescriptor, ColumnRule, MAX_COLUMNS};
}
