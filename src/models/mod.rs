use serde::{Deserialize, Deserializer, Serialize};

/// A shared link as returned by `/api/links`.
///
/// Only `link_id` is guaranteed; the backend omits fields it never recorded.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub(crate) struct Link {
    pub link_id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "lenient_count")]
    pub file_count: Option<u64>,

    #[serde(default, deserialize_with = "lenient_count")]
    pub views: Option<u64>,

    /// ISO-8601 string (Python `isoformat()` on the backend).
    #[serde(default)]
    pub created_at: Option<String>,

    /// Sum of file sizes in bytes. Only present when the link has files.
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_size: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub(crate) struct Stats {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub plan: String,

    #[serde(default, deserialize_with = "lenient_count")]
    pub total_links: Option<u64>,

    #[serde(default, deserialize_with = "lenient_count")]
    pub total_views: Option<u64>,

    #[serde(default)]
    pub bot_username: Option<String>,

    #[serde(default)]
    pub join_date: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct LinksResponse {
    pub links: Vec<Link>,
}

/// Counters come from MongoDB aggregates and may arrive as floats (`12.0`) or null.
fn lenient_count<'de, D>(de: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<serde_json::Value>::deserialize(de)?;
    Ok(v.and_then(|v| match v {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_contract_deserialize_full() {
        // Shape produced by web_server.api_get_links after file stripping.
        let json = r#"{
            "_id": "65a1",
            "user_id": 42,
            "link_id": "a1",
            "name": "Report",
            "category": "Docs",
            "file_count": 3,
            "views": 5,
            "created_at": "2024-01-01T10:00:00.123000+00:00",
            "total_size": 2048
        }"#;
        let link: Link = serde_json::from_str(json).expect("link should parse");
        assert_eq!(link.link_id, "a1");
        assert_eq!(link.name.as_deref(), Some("Report"));
        assert_eq!(link.category.as_deref(), Some("Docs"));
        assert_eq!(link.file_count, Some(3));
        assert_eq!(link.views, Some(5));
        assert_eq!(link.total_size, Some(2048));
    }

    #[test]
    fn test_link_contract_deserialize_minimal() {
        let link: Link = serde_json::from_str(r#"{"link_id": "z9"}"#).expect("should parse");
        assert_eq!(link.link_id, "z9");
        assert!(link.name.is_none());
        assert!(link.views.is_none());
        assert!(link.created_at.is_none());
    }

    #[test]
    fn test_link_counters_accept_floats_and_null() {
        let link: Link =
            serde_json::from_str(r#"{"link_id": "x", "views": 12.0, "file_count": null}"#)
                .expect("should parse");
        assert_eq!(link.views, Some(12));
        assert_eq!(link.file_count, None);
    }

    #[test]
    fn test_stats_contract_deserialize() {
        let json = r#"{
            "username": "alice",
            "total_links": 4,
            "total_views": 120,
            "plan": "Free",
            "join_date": "2023-11-02T08:00:00+00:00"
        }"#;
        let stats: Stats = serde_json::from_str(json).expect("stats should parse");
        assert_eq!(stats.username, "alice");
        assert_eq!(stats.plan, "Free");
        assert_eq!(stats.total_links, Some(4));
        assert_eq!(stats.total_views, Some(120));
        assert!(stats.bot_username.is_none());
    }

    #[test]
    fn test_links_response_requires_link_list() {
        assert!(serde_json::from_str::<LinksResponse>("{}").is_err());

        let parsed: LinksResponse =
            serde_json::from_str(r#"{"links": []}"#).expect("empty list should parse");
        assert!(parsed.links.is_empty());
    }
}
