use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

/// Plain `<select>` driven by `(value, label)` pairs.
///
/// The dashboard needs stable element ids on real form controls, so this stays a
/// native element rather than the popover-based listbox.
#[component]
pub fn NativeSelect(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] id: String,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "h-9 rounded-md border border-input bg-background px-2 text-sm shadow-xs outline-none focus-visible:ring-2 focus-visible:ring-ring/50",
        class
    );

    let handle_change = move |ev: web_sys::Event| {
        if let Some(select) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        {
            on_change.run(select.value());
        }
    };

    view! {
        <select data-name="NativeSelect" id=id class=merged_class on:change=handle_change prop:value=move || value.get()>
            <For
                each=move || options.get()
                key=|(v, _)| v.clone()
                children=move |(v, label)| {
                    let selected_value = v.clone();
                    view! {
                        <option value=v selected=move || value.get() == selected_value>
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}
