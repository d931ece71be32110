use crate::cards::{build_cards, LinkCard, NO_RESULTS};
use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardActions, CardContent,
    CardFooter, CardHeader, CardMeta, CardTitle, Input, NativeSelect, Spinner, Toast,
};
use crate::filters::{category_options, SortKey, ALL_CATEGORIES, FAVORITES};
use crate::state::{AppContext, AppState, GridState};
use crate::util::{format_date, page_origin};
use icons::{Copy as CopyIcon, ExternalLink, Eye, File, Send as SendIcon};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use strum::IntoEnumIterator;

const OPEN_LINK_CLASS: &str = "inline-flex size-8 items-center justify-center rounded-md hover:bg-accent hover:text-accent-foreground [&_svg]:size-4";
const SIDEBAR_ITEM_CLASS: &str = "flex h-8 w-full items-center rounded-md px-3 text-sm hover:bg-accent/60 hover:cursor-pointer truncate";

fn sort_options() -> Vec<(String, String)> {
    SortKey::iter()
        .map(|k| (k.to_string(), k.label().to_string()))
        .collect()
}

#[component]
fn StatsPanel() -> impl IntoView {
    let state = expect_context::<AppContext>().0;

    let username = move || state.stats.get().map(|s| s.username).unwrap_or_default();
    let plan = move || state.stats.get().map(|s| s.plan).unwrap_or_default();
    let count = move |pick: fn(&crate::models::Stats) -> Option<u64>| {
        state
            .stats
            .get()
            .and_then(|s| pick(&s))
            .map(|n| n.to_string())
            .unwrap_or_default()
    };
    let member_since = move || {
        state
            .stats
            .get()
            .map(|s| format_date(s.join_date.as_deref()))
            .filter(|d| !d.is_empty())
    };

    view! {
        <section class="flex flex-col gap-4 sm:flex-row sm:items-end sm:justify-between">
            <div class="flex flex-col gap-1">
                <div class="flex items-center gap-2">
                    <h2 id="username" class="text-lg font-semibold">{username}</h2>
                    <span id="plan-badge" class="rounded-full border px-2.5 py-0.5 text-xs">{plan}</span>
                </div>
                {move || member_since().map(|d| view! {
                    <p class="text-xs text-muted-foreground">{format!("Member since {d}")}</p>
                })}
            </div>

            <div class="flex gap-6">
                <div class="flex flex-col">
                    <span id="total-links" class="text-2xl font-semibold">
                        {move || count(|s| s.total_links)}
                    </span>
                    <span class="text-xs text-muted-foreground">"Total Links"</span>
                </div>
                <div class="flex flex-col">
                    <span id="total-views" class="text-2xl font-semibold">
                        {move || count(|s| s.total_views)}
                    </span>
                    <span class="text-xs text-muted-foreground">"Total Views"</span>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategorySidebar() -> impl IntoView {
    let state = expect_context::<AppContext>().0;

    let is_active = move |value: &str| state.query.get().category.as_value() == value;

    let shortcut = move |label: String, cat: String| {
        let active_value = if cat == FAVORITES { String::new() } else { cat.clone() };
        view! {
            <button
                type="button"
                class=move || {
                    if is_active(&active_value) {
                        format!("{SIDEBAR_ITEM_CLASS} bg-accent text-accent-foreground")
                    } else {
                        SIDEBAR_ITEM_CLASS.to_string()
                    }
                }
                on:click=move |_| state.filter_category(&cat)
            >
                {label}
            </button>
        }
    };

    view! {
        <aside class="flex w-full flex-col gap-1 sm:w-48">
            <span class="px-3 pb-1 text-xs font-medium text-muted-foreground">"Library"</span>
            {shortcut("All Links".to_string(), ALL_CATEGORIES.to_string())}
            {shortcut(FAVORITES.to_string(), FAVORITES.to_string())}
            <span class="px-3 pt-3 pb-1 text-xs font-medium text-muted-foreground">"Categories"</span>
            <For
                each=move || state.link_set.with(|s| s.categories.clone())
                key=|c| c.clone()
                children=move |c| shortcut(c.clone(), c)
            />
        </aside>
    }
}

#[component]
fn Toolbar() -> impl IntoView {
    let state = expect_context::<AppContext>().0;

    let search = Signal::derive(move || state.query.get().search);
    let sort_value = Signal::derive(move || {
        state
            .query
            .get()
            .sort
            .map(|k| k.to_string())
            .unwrap_or_default()
    });
    let category_value =
        Signal::derive(move || state.query.get().category.as_value().to_string());
    let categories = Signal::derive(move || state.link_set.with(|s| category_options(&s.categories)));

    view! {
        <div class="flex flex-col gap-2 sm:flex-row sm:items-center">
            <Input
                id="search-input"
                placeholder="Search by name or ID..."
                class="sm:max-w-xs"
                value=search
                on_value=move |term: String| state.set_search(term)
            />
            <NativeSelect
                id="category-select"
                options=categories
                value=category_value
                on_change=move |v: String| state.set_category(&v)
            />
            <NativeSelect
                id="sort-select"
                options=Signal::derive(sort_options)
                value=sort_value
                on_change=move |v: String| state.set_sort(&v)
            />
        </div>
    }
}

#[component]
fn LinkCardView(card: LinkCard) -> impl IntoView {
    let state = expect_context::<AppContext>().0;
    let copy_url = card.share_url.clone();

    view! {
        <Card>
            <CardHeader>
                <div class="flex min-w-0 flex-col gap-1">
                    <CardTitle>{card.title}</CardTitle>
                    <span class="category-tag w-fit rounded-full bg-secondary px-2 py-0.5 text-xs text-secondary-foreground">
                        {card.category}
                    </span>
                </div>
                <CardActions>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        attr:title="Copy Link"
                        on:click=move |_| state.copy_link(copy_url.clone())
                    >
                        <CopyIcon />
                    </Button>
                    <a href=card.share_url target="_blank" rel="noopener" title="Open" class=OPEN_LINK_CLASS>
                        <ExternalLink />
                    </a>
                    <a href=card.bot_url target="_blank" rel="noopener" title="Open in bot" class=OPEN_LINK_CLASS>
                        <SendIcon />
                    </a>
                </CardActions>
            </CardHeader>

            <CardContent>
                <CardMeta>
                    <File />
                    <span>{card.files}</span>
                </CardMeta>
                <CardMeta>
                    <Eye />
                    <span>{card.views}</span>
                </CardMeta>
                {card.size.map(|s| view! { <CardMeta><span>{s}</span></CardMeta> })}
            </CardContent>

            <CardFooter>
                <span class="date">{card.date}</span>
                <span class="id-badge font-mono">{card.id_badge}</span>
            </CardFooter>
        </Card>
    }
}

fn grid_message(message: String, loading: bool) -> AnyView {
    view! {
        <Alert>
            <AlertDescription class="inline-flex items-center gap-2">
                {loading.then(|| view! { <Spinner /> })}
                {message}
            </AlertDescription>
        </Alert>
    }
    .into_any()
}

#[component]
fn LinksGrid() -> impl IntoView {
    let state = expect_context::<AppContext>().0;
    let origin = page_origin();

    let visible_links = Memo::new(move |_| state.derived_view());

    let body = move || {
        let grid = state.grid.get();
        if let Some(message) = grid.placeholder() {
            return grid_message(message, grid == GridState::Loading);
        }

        let links = visible_links.get();
        if links.is_empty() {
            return grid_message(NO_RESULTS.to_string(), false);
        }

        let bot = state.bot_username.get();
        build_cards(&links, &origin, &bot)
            .into_iter()
            .map(|card| view! { <LinkCardView card=card /> })
            .collect_view()
            .into_any()
    };

    view! {
        <div id="links-grid" class="grid grid-cols-1 gap-4 md:grid-cols-2 xl:grid-cols-3">
            {body}
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let state: AppState = app_state.0;
    let query = use_query_map();

    // Read once on mount; the user id never changes for the lifetime of the page.
    state.start(query.get_untracked().get("u"));

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex w-full max-w-6xl flex-col gap-6 px-4 py-8">
                <StatsPanel />
                <div class="flex flex-col gap-6 sm:flex-row">
                    <CategorySidebar />
                    <main class="flex min-w-0 flex-1 flex-col gap-4">
                        <Toolbar />
                        <LinksGrid />
                    </main>
                </div>
            </div>
            <Toast visible=Signal::derive(move || state.toast.get().visible)>
                "Link copied to clipboard"
            </Toast>
        </div>
    }
}
