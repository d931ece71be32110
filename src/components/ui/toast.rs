use icons::Check;
use leptos::prelude::*;
use tw_merge::tw_merge;

/// Single-slot toast. Visibility is owned by the caller; see `ToastState`.
#[component]
pub fn Toast(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let base = tw_merge!(
        "fixed bottom-6 left-1/2 z-50 -translate-x-1/2 inline-flex items-center gap-2 rounded-lg border bg-popover px-4 py-2 text-sm text-popover-foreground shadow-lg transition-all duration-300",
        class
    );

    view! {
        <div
            id="toast"
            data-name="Toast"
            role="status"
            aria-live="polite"
            class=move || {
                if visible.get() {
                    format!("{base} show")
                } else {
                    format!("{base} opacity-0 pointer-events-none")
                }
            }
        >
            <Check class="size-4 text-success" />
            {children()}
        </div>
    }
}
