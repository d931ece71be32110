use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "link-card bg-card text-card-foreground flex flex-col gap-3 rounded-xl border py-4 shadow-sm"}
    clx! {CardHeader, div, "flex items-start justify-between gap-2 px-4"}
    clx! {CardTitle, h4, "leading-tight font-semibold truncate"}
    clx! {CardContent, div, "flex flex-wrap gap-4 px-4 text-xs text-muted-foreground"}
    clx! {CardFooter, footer, "flex items-center justify-between px-4 text-xs text-muted-foreground"}
    clx! {CardActions, div, "flex shrink-0 items-center gap-1"}
    clx! {CardMeta, div, "inline-flex items-center gap-1.5 [&_svg:not([class*='size-'])]:size-3.5"}
}

pub use components::*;
