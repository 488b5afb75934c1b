use super::*;

#[component]
/// Shared modal dialog with a mask layer.
///
/// Dismissal is caller-owned: clicking the mask or pressing Escape invokes
/// `on_dismiss`, and the caller flips `open`. Focus management and fallback
/// rendering belong to the surrounding presentation layer.
pub fn Modal(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] open: MaybeSignal<bool>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let dismiss = move || {
        if let Some(on_dismiss) = on_dismiss.as_ref() {
            on_dismiss.call(());
        }
    };
    let title = store_value(title);
    let aria_label = store_value(aria_label);
    let layout_class = store_value(layout_class);

    view! {
        <Show when=move || open.get()>
            <div
                class="ui-modal-mask"
                data-ui-primitive="true"
                data-ui-kind="modal-mask"
                on:click=move |_| dismiss()
            ></div>
            <div
                class=merge_layout_class("ui-modal", layout_class.get_value())
                role="dialog"
                aria-modal="true"
                aria-label=aria_label.get_value()
                data-ui-primitive="true"
                data-ui-kind="modal"
                on:keydown=move |ev| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        dismiss();
                    }
                }
            >
                {title
                    .get_value()
                    .map(|title| view! { <div data-ui-slot="title">{title}</div> })}
                <div data-ui-slot="body">{children()}</div>
            </div>
        </Show>
    }
}
