use crate::models::Link;
use crate::util::{bot_link, format_date, format_file_size, share_url};

pub(crate) const UNTITLED: &str = "Untitled Link";
pub(crate) const UNCATEGORIZED: &str = "Uncategorized";
pub(crate) const NO_RESULTS: &str = "No links found matching criteria.";

/// Display-ready fields for one link card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LinkCard {
    pub link_id: String,
    pub title: String,
    pub category: String,
    pub share_url: String,
    pub bot_url: String,
    pub files: String,
    pub views: String,
    pub size: Option<String>,
    pub date: String,
    pub id_badge: String,
}

impl LinkCard {
    pub fn build(link: &Link, origin: &str, bot_username: &str) -> Self {
        let non_empty = |s: &Option<String>| s.clone().filter(|s| !s.is_empty());

        Self {
            link_id: link.link_id.clone(),
            title: non_empty(&link.name).unwrap_or_else(|| UNTITLED.to_string()),
            category: non_empty(&link.category).unwrap_or_else(|| UNCATEGORIZED.to_string()),
            share_url: share_url(origin, &link.link_id),
            bot_url: bot_link(bot_username, &link.link_id),
            files: format!("{} Files", link.file_count.unwrap_or(0)),
            views: format!("{} Views", link.views.unwrap_or(0)),
            size: link.total_size.map(format_file_size),
            date: format_date(link.created_at.as_deref()),
            id_badge: format!("#{}", link.link_id),
        }
    }
}

pub(crate) fn build_cards(links: &[Link], origin: &str, bot_username: &str) -> Vec<LinkCard> {
    links
        .iter()
        .map(|l| LinkCard::build(l, origin, bot_username))
        .collect()
}
