//! Centralized icon API with an injectable glyph cache.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Closed set of icon glyphs the widget layer can render.
pub enum IconName {
    /// Confirmation check mark.
    Check,
    /// Dismiss/close cross.
    Close,
    /// Downward chevron.
    ChevronDown,
    /// Upward chevron.
    ChevronUp,
    /// Magnifier glyph.
    Search,
    /// Informational circle.
    Info,
    /// Warning triangle.
    Warning,
    /// Plus sign.
    Plus,
    /// Minus sign.
    Minus,
}

impl IconName {
    /// Stable token used in `data-ui-icon` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Close => "close",
            Self::ChevronDown => "chevron-down",
            Self::ChevronUp => "chevron-up",
            Self::Search => "search",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Plus => "plus",
            Self::Minus => "minus",
        }
    }

    fn path_data(self) -> &'static str {
        match self {
            Self::Check => "M9 16.2 4.8 12l-1.4 1.4L9 19 21 7l-1.4-1.4z",
            Self::Close => "M19 6.4 17.6 5 12 10.6 6.4 5 5 6.4 10.6 12 5 17.6 6.4 19 12 13.4 17.6 19 19 17.6 13.4 12z",
            Self::ChevronDown => "M7.4 8.6 12 13.2l4.6-4.6L18 10l-6 6-6-6z",
            Self::ChevronUp => "M7.4 15.4 12 10.8l4.6 4.6L18 14l-6-6-6 6z",
            Self::Search => "M15.5 14h-.8l-.3-.3a6.5 6.5 0 1 0-.7.7l.3.3v.8l5 5 1.5-1.5zm-6 0a4.5 4.5 0 1 1 0-9 4.5 4.5 0 0 1 0 9z",
            Self::Info => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm1 15h-2v-6h2zm0-8h-2V7h2z",
            Self::Warning => "M1 21h22L12 2zm12-3h-2v-2h2zm0-4h-2v-4h2z",
            Self::Plus => "M19 13h-6v6h-2v-6H5v-2h6V5h2v6h6z",
            Self::Minus => "M19 13H5v-2h14z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Inline/dense icon.
    Sm,
    /// Default icon.
    Md,
    /// Prominent icon.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Clone, Default)]
/// Unbounded cache of prepared glyph path data.
///
/// The cache is injected through the reactive context (see
/// [`provide_icon_cache`]) rather than living as ambient module state. An
/// entry is prepared on first lookup and retained for every later one;
/// nothing ever evicts.
pub struct IconCache {
    entries: Rc<RefCell<HashMap<IconName, Rc<str>>>>,
}

impl IconCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepared path data for `name`.
    pub fn path_for(&self, name: IconName) -> Rc<str> {
        Rc::clone(
            self.entries
                .borrow_mut()
                .entry(name)
                .or_insert_with(|| Rc::from(name.path_data())),
        )
    }

    /// Number of glyphs prepared so far.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether no glyph has been prepared yet.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

/// Installs a fresh [`IconCache`] into the reactive context for every
/// descendant [`Icon`].
pub fn provide_icon_cache() {
    provide_context(IconCache::new());
}

#[component]
/// Inline SVG icon.
///
/// Glyph lookup goes through the contextual [`IconCache`] when one was
/// provided; otherwise the path data is resolved directly.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    let path = use_context::<IconCache>()
        .map(|cache| cache.path_for(icon))
        .unwrap_or_else(|| Rc::from(icon.path_data()));

    view! {
        <svg
            class="ui-icon"
            viewBox="0 0 24 24"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            <path d=path.to_string() fill="currentColor"></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn repeated_lookups_share_one_prepared_artifact() {
        let cache = IconCache::new();
        let first = cache.path_for(IconName::Check);
        let second = cache.path_for(IconName::Check);

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn entries_accumulate_and_never_evict() {
        let cache = IconCache::new();
        let names = [IconName::Check, IconName::Close, IconName::Search];
        for _ in 0..3 {
            for name in names {
                assert_eq!(&*cache.path_for(name), name.path_data());
            }
        }
        assert_eq!(cache.len(), names.len());
    }
}
