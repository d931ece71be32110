use crate::api::{ApiClient, ApiResult};
use crate::clipboard;
use crate::filters::{apply_filters, collect_categories, CategoryFilter, LinkQuery, SortKey};
use crate::models::{Link, Stats};
use crate::storage::{load_sort_preference, save_sort_preference};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use std::time::Duration;

pub(crate) const DEFAULT_BOT_USERNAME: &str = "SHAREBOXBOT";
pub(crate) const TOAST_DURATION_MS: u64 = 3000;

/// All links of the session plus the categories derived from them.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct LinkSet {
    pub links: Vec<Link>,
    pub categories: Vec<String>,
}

impl LinkSet {
    /// Wholesale replacement; categories are always recomputed from the new list.
    pub fn replace(&mut self, links: Vec<Link>) {
        self.categories = collect_categories(&links);
        self.links = links;
    }

    pub fn view(&self, query: &LinkQuery) -> Vec<Link> {
        apply_filters(&self.links, query)
    }
}

/// What the links grid shows instead of cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum GridState {
    MissingUser,
    Loading,
    Failed(String),
    Ready,
}

impl GridState {
    pub fn placeholder(&self) -> Option<String> {
        match self {
            GridState::MissingUser => Some("⚠️ Error: Missing User ID".to_string()),
            GridState::Loading => Some("Loading...".to_string()),
            GridState::Failed(msg) => Some(format!("❌ Error: {msg}")),
            GridState::Ready => None,
        }
    }
}

/// Single toast slot. Each `show` starts a new generation; only the newest timer may hide it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ToastState {
    pub visible: bool,
    pub generation: u64,
}

impl ToastState {
    pub fn show(&mut self) -> u64 {
        self.visible = true;
        self.generation = self.generation.saturating_add(1);
        self.generation
    }

    /// Returns true if this expiry actually hid the toast.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.generation == generation && self.visible {
            self.visible = false;
            return true;
        }
        false
    }
}

/// Monotonic request ids; responses carrying an older id are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn issue(&mut self) -> u64 {
        self.latest = self.latest.saturating_add(1);
        self.latest
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.latest == id
    }
}

/// `u` query value, passed through as given; only missing or empty is rejected.
pub(crate) fn normalize_user_id(raw: Option<String>) -> Option<String> {
    raw.filter(|u| !u.is_empty())
}

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,

    pub stats: RwSignal<Option<Stats>>,
    pub bot_username: RwSignal<String>,

    pub link_set: RwSignal<LinkSet>,
    pub grid: RwSignal<GridState>,
    pub query: RwSignal<LinkQuery>,

    pub toast: RwSignal<ToastState>,
    pub toast_timer: RwSignal<Option<TimeoutHandle>>,

    /// Stale-response guards, one per endpoint.
    pub stats_seq: RwSignal<RequestSeq>,
    pub links_seq: RwSignal<RequestSeq>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_client(ApiClient::from_env(), load_sort_preference())
    }

    pub fn with_client(api_client: ApiClient, sort: SortKey) -> Self {
        Self {
            api_client: RwSignal::new(api_client),
            stats: RwSignal::new(None),
            bot_username: RwSignal::new(DEFAULT_BOT_USERNAME.to_string()),
            link_set: RwSignal::new(LinkSet::default()),
            grid: RwSignal::new(GridState::Loading),
            query: RwSignal::new(LinkQuery {
                sort: Some(sort),
                ..LinkQuery::default()
            }),
            toast: RwSignal::new(ToastState::default()),
            toast_timer: RwSignal::new(None),
            stats_seq: RwSignal::new(RequestSeq::default()),
            links_seq: RwSignal::new(RequestSeq::default()),
        }
    }

    /// Page entry point. Without a user id the grid shows an error and nothing is fetched.
    pub fn start(&self, user_id: Option<String>) -> bool {
        let Some(user_id) = normalize_user_id(user_id) else {
            log::warn!("dashboard opened without a user id");
            self.grid.set(GridState::MissingUser);
            return false;
        };

        self.fetch_stats(user_id.clone());
        self.fetch_links(user_id);
        true
    }

    pub fn fetch_stats(&self, user_id: String) {
        let mut seq = self.stats_seq.get_untracked();
        let req_id = seq.issue();
        self.stats_seq.set(seq);

        let api_client = self.api_client.get_untracked();
        let this = *self;
        spawn_local(async move {
            let result = api_client.get_stats(&user_id).await;

            if !this.stats_seq.get_untracked().is_current(req_id) {
                return;
            }

            this.apply_stats_result(result);
        });
    }

    pub(crate) fn apply_stats_result(&self, result: ApiResult<Stats>) {
        match result {
            Ok(stats) => self.apply_stats(stats),
            // Stats are decorative; the panel just stays empty.
            Err(e) => log::error!("Stats Error: {e}"),
        }
    }

    pub(crate) fn apply_stats(&self, stats: Stats) {
        let bot = stats
            .bot_username
            .clone()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BOT_USERNAME.to_string());
        self.bot_username.set(bot);
        self.stats.set(Some(stats));
    }

    pub fn fetch_links(&self, user_id: String) {
        let mut seq = self.links_seq.get_untracked();
        let req_id = seq.issue();
        self.links_seq.set(seq);

        self.grid.set(GridState::Loading);

        let api_client = self.api_client.get_untracked();
        let this = *self;
        spawn_local(async move {
            let result = api_client.get_links(&user_id).await;

            if !this.links_seq.get_untracked().is_current(req_id) {
                log::debug!("dropping stale links response #{req_id}");
                return;
            }

            this.apply_links_result(result);
        });
    }

    pub(crate) fn apply_links_result(&self, result: ApiResult<Vec<Link>>) {
        match result {
            Ok(links) => self.apply_links(links),
            Err(e) => {
                log::warn!("links request failed: {e}");
                self.grid.set(GridState::Failed(e.to_string()));
            }
        }
    }

    pub(crate) fn apply_links(&self, links: Vec<Link>) {
        log::info!("loaded {} links", links.len());
        self.link_set.update(|s| s.replace(links));
        // The category options were rebuilt, so the selection returns to "all".
        self.query.update(|q| q.category = CategoryFilter::All);
        self.grid.set(GridState::Ready);
    }

    /// Tracked read of the filtered and sorted links.
    pub fn derived_view(&self) -> Vec<Link> {
        let query = self.query.get();
        self.link_set.with(|s| s.view(&query))
    }

    pub fn set_search(&self, term: String) {
        self.query.update(|q| q.search = term);
    }

    pub fn set_category(&self, value: &str) {
        self.query
            .update(|q| q.category = CategoryFilter::from_value(value));
    }

    pub fn set_sort(&self, value: &str) {
        let sort = SortKey::parse(value);
        if let Some(key) = sort {
            save_sort_preference(key);
        }
        self.query.update(|q| q.sort = sort);
    }

    /// Programmatic category selection used by the sidebar.
    pub fn filter_category(&self, cat: &str) {
        self.query
            .update(|q| q.category = CategoryFilter::from_shortcut(cat));
    }

    pub fn copy_link(&self, url: String) {
        let this = *self;
        spawn_local(async move {
            match clipboard::write_text(&url).await {
                Ok(()) => this.show_toast(),
                Err(e) => log::warn!("copy failed: {e}"),
            }
        });
    }

    /// Shows the toast and restarts its dismissal timer.
    pub fn show_toast(&self) {
        let mut toast = self.toast.get_untracked();
        let generation = toast.show();
        self.toast.set(toast);

        if let Some(handle) = self.toast_timer.get_untracked() {
            handle.clear();
        }

        let toast_signal = self.toast;
        match set_timeout_with_handle(
            move || {
                toast_signal.update(|t| {
                    t.expire(generation);
                });
            },
            Duration::from_millis(TOAST_DURATION_MS),
        ) {
            Ok(handle) => self.toast_timer.set(Some(handle)),
            Err(e) => log::warn!("toast timer unavailable: {e:?}"),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);
