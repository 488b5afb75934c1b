use super::*;

fn clamp_percent(value: &str, min: Option<&str>, max: Option<&str>) -> f32 {
    let value = value.parse::<f32>().unwrap_or(0.0);
    let min = min.and_then(|raw| raw.parse::<f32>().ok()).unwrap_or(0.0);
    let max = max.and_then(|raw| raw.parse::<f32>().ok()).unwrap_or(100.0);
    let span = (max - min).max(1.0);
    (((value - min) / span) * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Closed option descriptor consumed by group-style composites.
///
/// [`CheckboxGroup`], [`RadioGroup`], and [`Select`] accept only
/// `GroupOption` values, mirroring the grid's typed column boundary: a
/// non-option child cannot be expressed, so no runtime shape-sniffing of
/// children is needed.
pub struct GroupOption {
    value: String,
    label: String,
    disabled: bool,
}

impl GroupOption {
    /// Option with a submit value and a visible label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Marks the option as non-interactive.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Submit value of the option.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Visible label of the option.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the option is non-interactive.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

#[component]
/// Shared button widget with semantic variant, size, and shape tokens plus
/// optional icon slots.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = ButtonShape::Standard)] shape: ButtonShape,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            id=id
            aria-label=move || aria_label.get()
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-shape=shape.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
            {trailing_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
        </button>
    }
}

#[component]
/// Shared single-line text input.
pub fn Input(
    #[prop(default = InputVariant::Standard)] variant: InputVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-input", layout_class)
            id=id
            placeholder=placeholder
            aria-label=aria_label
            node_ref=node_ref
            type=input_type.unwrap_or("text")
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="input"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
            on:focus=move |ev| {
                if let Some(on_focus) = on_focus.as_ref() {
                    on_focus.call(ev);
                }
            }
            on:blur=move |ev| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(ev);
                }
            }
        />
    }
}

#[component]
/// Shared checkbox input.
pub fn Checkbox(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-checkbox", layout_class)
            type="checkbox"
            aria-label=move || aria_label.get()
            prop:checked=move || checked.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-selected=move || bool_token(checked.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
        />
    }
}

#[component]
/// Group of labeled checkboxes over a closed option list.
///
/// `values` holds the currently checked submit values; `on_toggle` receives
/// the value of the option whose checkbox changed.
pub fn CheckboxGroup(
    options: Vec<GroupOption>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] values: MaybeSignal<Vec<String>>,
    #[prop(optional)] on_toggle: Option<Callback<String>>,
) -> impl IntoView {
    let values = Signal::derive(move || values.get());

    view! {
        <div
            class=merge_layout_class("ui-checkbox-group", layout_class)
            role="group"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="checkbox-group"
        >
            {options
                .into_iter()
                .map(|option| {
                    let value = option.value().to_string();
                    let checked_value = value.clone();
                    let checked =
                        Signal::derive(move || values.get().contains(&checked_value));
                    view! {
                        <label data-ui-slot="option">
                            <Checkbox
                                checked=checked
                                disabled=option.is_disabled()
                                on_change=Callback::new(move |_| {
                                    if let Some(on_toggle) = on_toggle.as_ref() {
                                        on_toggle.call(value.clone());
                                    }
                                })
                            />
                            <span data-ui-slot="label">{option.label().to_string()}</span>
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
/// Shared radio input.
pub fn Radio(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] value: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-radio", layout_class)
            type="radio"
            name=name
            value=value
            aria-label=move || aria_label.get()
            prop:checked=move || checked.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="radio"
            data-ui-selected=move || bool_token(checked.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
        />
    }
}

#[component]
/// Exclusive-choice group of labeled radios over a closed option list.
pub fn RadioGroup(
    options: Vec<GroupOption>,
    #[prop(into)] name: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let selected = Signal::derive(move || value.get());

    view! {
        <div
            class=merge_layout_class("ui-radio-group", layout_class)
            role="radiogroup"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="radio-group"
        >
            {options
                .into_iter()
                .map(|option| {
                    let option_value = option.value().to_string();
                    let checked_value = option_value.clone();
                    let checked =
                        Signal::derive(move || selected.get() == checked_value);
                    view! {
                        <label data-ui-slot="option">
                            <Radio
                                name=name.clone()
                                value=option_value.clone()
                                checked=checked
                                disabled=option.is_disabled()
                                on_change=Callback::new(move |_| {
                                    if let Some(on_change) = on_change.as_ref() {
                                        on_change.call(option_value.clone());
                                    }
                                })
                            />
                            <span data-ui-slot="label">{option.label().to_string()}</span>
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
/// Shared select widget over a closed option list.
pub fn Select(
    options: Vec<GroupOption>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    view! {
        <select
            class=merge_layout_class("ui-select", layout_class)
            aria-label=aria_label
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-slot=ui_slot
            data-ui-disabled=move || bool_token(disabled.get())
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
        >
            {options
                .into_iter()
                .map(|option| {
                    view! {
                        <option value=option.value().to_string() disabled=option.is_disabled()>
                            {option.label().to_string()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
/// Shared slider widget with a percent CSS hook for active-track styling.
pub fn Slider(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] min: Option<&'static str>,
    #[prop(optional)] max: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    let value_signal = Signal::derive(move || value.get());
    let percent = Signal::derive(move || clamp_percent(&value_signal.get(), min, max));

    view! {
        <input
            class=merge_layout_class("ui-slider", layout_class)
            type="range"
            min=min
            max=max
            aria-label=aria_label
            prop:value=move || value_signal.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="slider"
            data-ui-slot=ui_slot
            data-ui-value=move || value_signal.get()
            data-ui-min=min.unwrap_or("0")
            data-ui-max=max.unwrap_or("100")
            data-ui-percent=move || format!("{:.2}", percent.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        />
    }
}

#[component]
/// Shared switch with explicit `role="switch"` semantics.
pub fn Switch(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] checked_label: Option<String>,
    #[prop(optional, into)] unchecked_label: Option<String>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    let handle_toggle = move || {
        if disabled.get_untracked() {
            return;
        }
        if let Some(on_toggle) = on_toggle.as_ref() {
            on_toggle.call(!checked.get_untracked());
        }
    };

    let label = move || {
        if checked.get() {
            checked_label.clone()
        } else {
            unchecked_label.clone()
        }
    };

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-switch", layout_class)
            role="switch"
            aria-label=move || aria_label.get()
            aria-checked=move || checked.get().to_string()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="switch"
            data-ui-slot=ui_slot
            data-ui-selected=move || bool_token(checked.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |_| handle_toggle()
            on:keydown=move |ev| match ev.key().as_str() {
                " " | "Enter" => {
                    ev.prevent_default();
                    handle_toggle();
                }
                _ => {}
            }
        >
            <span data-ui-slot="track">
                <span data-ui-slot="thumb"></span>
                {move || label().map(|label| view! { <span data-ui-slot="label">{label}</span> })}
            </span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clamp_percent_scales_into_the_declared_range() {
        assert_eq!(clamp_percent("50", None, None), 50.0);
        assert_eq!(clamp_percent("5", Some("0"), Some("10")), 50.0);
        assert_eq!(clamp_percent("15", Some("10"), Some("20")), 50.0);
    }

    #[test]
    fn clamp_percent_saturates_and_tolerates_garbage() {
        assert_eq!(clamp_percent("250", None, None), 100.0);
        assert_eq!(clamp_percent("-3", None, None), 0.0);
        assert_eq!(clamp_percent("not a number", None, None), 0.0);
    }

    #[test]
    fn group_options_keep_value_label_and_disabled_state() {
        let option = GroupOption::new("a", "Option A");
        assert_eq!(option.value(), "a");
        assert_eq!(option.label(), "Option A");
        assert!(!option.is_disabled());
        assert!(option.disabled().is_disabled());
    }
}
