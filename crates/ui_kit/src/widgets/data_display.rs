use super::*;

#[component]
/// Compact labeled marker with a semantic tone and an optional close affordance.
pub fn Tag(
    #[prop(default = TagTone::Neutral)] tone: TagTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] closable: bool,
    #[prop(optional, into)] visible: Option<MaybeSignal<bool>>,
    #[prop(optional)] on_close: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let visible = visible.unwrap_or_else(|| MaybeSignal::Static(true));

    view! {
        <span
            class=merge_layout_class("ui-tag", layout_class)
            hidden=move || !visible.get()
            data-ui-primitive="true"
            data-ui-kind="tag"
            data-ui-slot=ui_slot
            data-ui-tone=tone.token()
            data-ui-closable=bool_token(closable)
        >
            <span data-ui-slot="label">{children()}</span>
            {closable.then(|| {
                view! {
                    <button
                        type="button"
                        aria-label="close"
                        data-ui-slot="close"
                        on:click=move |ev| {
                            if let Some(on_close) = on_close.as_ref() {
                                on_close.call(ev);
                            }
                        }
                    >
                        <Icon icon=IconName::Close size=IconSize::Sm />
                    </button>
                }
            })}
        </span>
    }
}
