use crate::models::Link;
use crate::util::timestamp_ms;
use std::cmp::Ordering;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Value of the synthetic "every category" option.
pub(crate) const ALL_CATEGORIES: &str = "all";

/// Sidebar pseudo-category that currently behaves like "all".
pub(crate) const FAVORITES: &str = "Favorites";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr, EnumString, EnumIter)]
pub(crate) enum SortKey {
    #[default]
    #[strum(serialize = "date-desc")]
    DateDesc,
    #[strum(serialize = "date-asc")]
    DateAsc,
    #[strum(serialize = "name-asc")]
    NameAsc,
    #[strum(serialize = "name-desc")]
    NameDesc,
    #[strum(serialize = "views-desc")]
    ViewsDesc,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "Newest first",
            SortKey::DateAsc => "Oldest first",
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
            SortKey::ViewsDesc => "Most viewed",
        }
    }

    /// `None` for anything that is not one of the five known keys.
    pub fn parse(value: &str) -> Option<SortKey> {
        SortKey::from_str(value).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    /// Sidebar shortcut mapping. "Favorites" has no backing data yet and shows everything.
    pub fn from_shortcut(cat: &str) -> Self {
        if cat == FAVORITES {
            CategoryFilter::All
        } else {
            CategoryFilter::from_value(cat)
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(c) => c,
        }
    }

    fn admits(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => category == Some(c.as_str()),
        }
    }
}

/// Current toolbar selections. `sort: None` keeps the server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LinkQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: Option<SortKey>,
}

impl Default for LinkQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            sort: Some(SortKey::default()),
        }
    }
}

pub(crate) fn matches_search(link: &Link, term_lower: &str) -> bool {
    if term_lower.is_empty() {
        return true;
    }

    let name_hit = link
        .name
        .as_deref()
        .is_some_and(|n| n.to_lowercase().contains(term_lower));

    name_hit || link.link_id.to_lowercase().contains(term_lower)
}

#[cfg(target_arch = "wasm32")]
fn locale_cmp(a: &str, b: &str) -> Ordering {
    js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new())
        .cmp(&0)
}

// Native builds have no ICU collator: compare case-folded, lowercase first on ties.
#[cfg(not(target_arch = "wasm32"))]
fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

fn compare(a: &Link, b: &Link, key: SortKey) -> Ordering {
    let name = |l: &Link| l.name.clone().unwrap_or_default();

    match key {
        SortKey::DateDesc => {
            timestamp_ms(b.created_at.as_deref()).cmp(&timestamp_ms(a.created_at.as_deref()))
        }
        SortKey::DateAsc => {
            timestamp_ms(a.created_at.as_deref()).cmp(&timestamp_ms(b.created_at.as_deref()))
        }
        SortKey::NameAsc => locale_cmp(&name(a), &name(b)),
        SortKey::NameDesc => locale_cmp(&name(b), &name(a)),
        SortKey::ViewsDesc => b.views.unwrap_or(0).cmp(&a.views.unwrap_or(0)),
    }
}

/// Stable in-place sort. `None` leaves the order untouched.
pub(crate) fn sort_links(links: &mut [Link], key: Option<SortKey>) {
    if let Some(key) = key {
        links.sort_by(|a, b| compare(a, b, key));
    }
}

/// Filtered and sorted copy of `links`; the input is never reordered.
pub(crate) fn apply_filters(links: &[Link], query: &LinkQuery) -> Vec<Link> {
    let term = query.search.to_lowercase();

    let mut out: Vec<Link> = links
        .iter()
        .filter(|l| matches_search(l, &term) && query.category.admits(l.category.as_deref()))
        .cloned()
        .collect();

    sort_links(&mut out, query.sort);
    out
}

/// Distinct non-empty categories in first-occurrence order.
pub(crate) fn collect_categories(links: &[Link]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for l in links {
        if let Some(c) = l.category.as_deref().filter(|c| !c.is_empty()) {
            if !out.iter().any(|x| x == c) {
                out.push(c.to_string());
            }
        }
    }
    out
}

/// `(value, label)` pairs for the category `<select>`, "all" first.
pub(crate) fn category_options(categories: &[String]) -> Vec<(String, String)> {
    std::iter::once((ALL_CATEGORIES.to_string(), "All Categories".to_string()))
        .chain(categories.iter().map(|c| (c.clone(), c.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn link(id: &str, name: Option<&str>, views: Option<u64>, created: Option<&str>) -> Link {
        Link {
            link_id: id.to_string(),
            name: name.map(str::to_string),
            views,
            created_at: created.map(str::to_string),
            ..Default::default()
        }
    }

    fn with_category(mut l: Link, cat: &str) -> Link {
        l.category = Some(cat.to_string());
        l
    }

    fn ids(links: &[Link]) -> Vec<&str> {
        links.iter().map(|l| l.link_id.as_str()).collect()
    }

    fn sample() -> Vec<Link> {
        vec![
            link("a1", Some("Report"), Some(5), Some("2024-01-01")),
            link("b2", Some("Data"), Some(20), Some("2024-06-01")),
        ]
    }

    fn query(search: &str, category: &str, sort: &str) -> LinkQuery {
        LinkQuery {
            search: search.to_string(),
            category: CategoryFilter::from_value(category),
            sort: SortKey::parse(sort),
        }
    }

    #[test]
    fn test_sort_key_round_trips_through_select_values() {
        for key in SortKey::iter() {
            assert_eq!(SortKey::parse(key.as_ref()), Some(key));
        }
        assert_eq!(SortKey::parse("size-desc"), None);
        assert_eq!(SortKey::default().to_string(), "date-desc");
    }

    #[test]
    fn test_end_to_end_sample() {
        let links = sample();
        assert_eq!(ids(&apply_filters(&links, &query("", "all", "views-desc"))), ["b2", "a1"]);
        assert_eq!(ids(&apply_filters(&links, &query("", "all", "date-asc"))), ["a1", "b2"]);
        assert_eq!(ids(&apply_filters(&links, &query("rep", "all", "date-desc"))), ["a1"]);
    }

    #[test]
    fn test_empty_query_keeps_every_link() {
        let links = vec![
            link("x", None, None, None),
            link("y", Some(""), Some(1), Some("2020-01-01")),
            link("z", Some("Zed"), Some(3), Some("2021-01-01")),
        ];
        for key in SortKey::iter() {
            let out = apply_filters(&links, &query("", "all", key.as_ref()));
            let mut got = ids(&out);
            got.sort();
            assert_eq!(got, ["x", "y", "z"], "sort key {key}");
        }
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_id() {
        let links = vec![
            link("AbC123", Some("Holiday Photos"), None, None),
            link("zzz", Some("Tax RETURN"), None, None),
            link("qqq", None, None, None),
        ];
        assert_eq!(ids(&apply_filters(&links, &query("abc", "all", "x"))), ["AbC123"]);
        assert_eq!(ids(&apply_filters(&links, &query("PHOTO", "all", "x"))), ["AbC123"]);
        assert_eq!(ids(&apply_filters(&links, &query("return", "all", "x"))), ["zzz"]);
        assert!(apply_filters(&links, &query("nomatch", "all", "x")).is_empty());
    }

    #[test]
    fn test_search_miss_excludes_even_when_category_matches() {
        let links = vec![with_category(link("a1", Some("Report"), None, None), "Docs")];
        assert!(apply_filters(&links, &query("photo", "Docs", "date-desc")).is_empty());
        assert_eq!(ids(&apply_filters(&links, &query("rep", "Docs", "date-desc"))), ["a1"]);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let links = vec![
            with_category(link("a", None, None, None), "Docs"),
            with_category(link("b", None, None, None), "docs"),
            link("c", None, None, None),
        ];
        assert_eq!(ids(&apply_filters(&links, &query("", "Docs", "x"))), ["a"]);
        assert_eq!(ids(&apply_filters(&links, &query("", "all", "x"))), ["a", "b", "c"]);
    }

    #[test]
    fn test_views_desc_is_stable_on_ties() {
        let links = vec![
            link("first", None, Some(3), None),
            link("big", None, Some(10), None),
            link("second", None, Some(3), None),
            link("none", None, None, None),
            link("third", None, Some(3), None),
        ];
        let out = apply_filters(&links, &query("", "all", "views-desc"));
        assert_eq!(ids(&out), ["big", "first", "second", "third", "none"]);
    }

    #[test]
    fn test_date_desc_puts_missing_last() {
        let links = vec![
            link("missing", None, None, None),
            link("old", None, None, Some("2019-05-01")),
            link("new", None, None, Some("2024-05-01T10:00:00")),
        ];
        let out = apply_filters(&links, &query("", "all", "date-desc"));
        assert_eq!(ids(&out), ["new", "old", "missing"]);
    }

    #[test]
    fn test_name_sorts_treat_missing_as_empty() {
        let links = vec![
            link("b", Some("banana"), None, None),
            link("n", None, None, None),
            link("a", Some("Apple"), None, None),
        ];
        assert_eq!(ids(&apply_filters(&links, &query("", "all", "name-asc"))), ["n", "a", "b"]);
        assert_eq!(ids(&apply_filters(&links, &query("", "all", "name-desc"))), ["b", "a", "n"]);
    }

    #[test]
    fn test_unknown_sort_keeps_server_order() {
        let links = vec![
            link("3", None, Some(1), Some("2020-01-01")),
            link("1", None, Some(9), Some("2024-01-01")),
            link("2", None, Some(5), None),
        ];
        let out = apply_filters(&links, &query("", "all", "bogus"));
        assert_eq!(ids(&out), ["3", "1", "2"]);
    }

    #[test]
    fn test_apply_filters_does_not_reorder_input() {
        let links = sample();
        let _ = apply_filters(&links, &query("", "all", "views-desc"));
        assert_eq!(ids(&links), ["a1", "b2"]);
    }

    #[test]
    fn test_collect_categories_distinct_in_first_seen_order() {
        let links = vec![
            with_category(link("1", None, None, None), "Work"),
            with_category(link("2", None, None, None), ""),
            link("3", None, None, None),
            with_category(link("4", None, None, None), "Music"),
            with_category(link("5", None, None, None), "Work"),
        ];
        let cats = collect_categories(&links);
        assert_eq!(cats, ["Work", "Music"]);

        let opts = category_options(&cats);
        let values: Vec<&str> = opts.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(values, ["all", "Work", "Music"]);
        assert_eq!(opts[0].1, "All Categories");
    }

    #[test]
    fn test_favorites_shortcut_maps_to_all() {
        assert_eq!(CategoryFilter::from_shortcut("Favorites"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_shortcut("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_shortcut("Work"),
            CategoryFilter::Only("Work".to_string())
        );
        assert_eq!(CategoryFilter::from_shortcut("Work").as_value(), "Work");
    }
}
