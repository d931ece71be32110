use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// en-GB short month names as rendered by current browsers (note "Sept").
const MONTHS_EN_GB: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

enum Parsed {
    Zoned(DateTime<chrono::FixedOffset>),
    Naive(NaiveDateTime),
}

fn parse_iso(s: &str) -> Option<Parsed> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Parsed::Zoned(dt));
    }

    // Python `isoformat()` on a naive datetime; `%.f` also accepts a missing fraction.
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Parsed::Naive(dt));
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(Parsed::Naive)
}

/// Milliseconds since the Unix epoch for an optional ISO timestamp.
///
/// Missing, empty and unparseable values all map to `0` so they sort as the oldest.
pub(crate) fn timestamp_ms(iso: Option<&str>) -> i64 {
    match iso.and_then(parse_iso) {
        Some(Parsed::Zoned(dt)) => dt.timestamp_millis(),
        Some(Parsed::Naive(dt)) => dt.and_utc().timestamp_millis(),
        None => 0,
    }
}

/// `1 Jan 2024` style date. Empty input gives an empty string.
pub(crate) fn format_date(iso: Option<&str>) -> String {
    let Some(raw) = iso.filter(|s| !s.trim().is_empty()) else {
        return String::new();
    };

    let date = match parse_iso(raw) {
        Some(Parsed::Zoned(dt)) => dt.date_naive(),
        Some(Parsed::Naive(dt)) => dt.date(),
        None => return "Invalid Date".to_string(),
    };

    use chrono::Datelike;
    let month = MONTHS_EN_GB[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

pub(crate) fn format_file_size(size_bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    if size_bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = size_bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", size_bytes, UNITS[0])
    } else {
        format!("{:.2} {}", size, UNITS[unit])
    }
}

pub(crate) fn share_url(origin: &str, link_id: &str) -> String {
    format!("{}/share/{}", origin.trim_end_matches('/'), link_id)
}

/// Telegram deep link that opens the link inside the bot.
pub(crate) fn bot_link(bot_username: &str, link_id: &str) -> String {
    format!(
        "https://t.me/{}?start={}",
        bot_username.trim().trim_start_matches('@'),
        link_id
    )
}

/// `location.origin` of the current page, or empty outside a browser.
pub(crate) fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_ms_missing_is_epoch() {
        assert_eq!(timestamp_ms(None), 0);
        assert_eq!(timestamp_ms(Some("")), 0);
        assert_eq!(timestamp_ms(Some("not a date")), 0);
    }

    #[test]
    fn test_timestamp_ms_accepts_backend_formats() {
        let date_only = timestamp_ms(Some("2024-01-01"));
        assert_eq!(date_only, 1_704_067_200_000);

        assert_eq!(timestamp_ms(Some("2024-01-01T00:00:00")), date_only);
        assert_eq!(timestamp_ms(Some("2024-01-01T00:00:00.250000")), date_only + 250);
        assert_eq!(timestamp_ms(Some("2024-01-01T00:00:00+00:00")), date_only);
        assert_eq!(timestamp_ms(Some("2024-01-01T05:30:00+05:30")), date_only);
    }

    #[test]
    fn test_format_date_en_gb() {
        assert_eq!(format_date(Some("2024-01-01")), "1 Jan 2024");
        assert_eq!(format_date(Some("2024-09-05T12:00:00+00:00")), "5 Sept 2024");
        assert_eq!(format_date(Some("2023-12-31T23:59:59.999")), "31 Dec 2023");
    }

    #[test]
    fn test_format_date_empty_and_invalid() {
        assert_eq!(format_date(None), "");
        assert_eq!(format_date(Some("")), "");
        assert_eq!(format_date(Some("yesterday")), "Invalid Date");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1024), "1.00 KB");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_share_and_bot_links() {
        assert_eq!(
            share_url("https://box.example", "a1"),
            "https://box.example/share/a1"
        );
        assert_eq!(
            share_url("https://box.example/", "a1"),
            "https://box.example/share/a1"
        );
        assert_eq!(
            bot_link("@ShareBoxBot", "a1"),
            "https://t.me/ShareBoxBot?start=a1"
        );
    }
}
