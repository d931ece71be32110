use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "loader col-span-full w-full rounded-lg border px-4 py-6 text-center text-sm"}
    clx! {AlertDescription, p, "text-sm text-muted-foreground"}
}

pub use components::*;
